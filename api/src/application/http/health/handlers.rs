pub mod health_live;
