mod compare_test;
mod solve_test;
