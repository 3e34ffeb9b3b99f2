mod availability_test;
mod health_test;
mod location_test;
mod middleware_test;
