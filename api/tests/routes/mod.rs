mod comments;
mod health_test;
