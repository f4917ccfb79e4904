pub mod connect;
pub mod highlight;
pub mod watch;
