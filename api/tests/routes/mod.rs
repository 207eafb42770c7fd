mod attendance;
mod health_test;
mod students;
