mod helpers;

mod articles;
mod health_check;
