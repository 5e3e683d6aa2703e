pub mod host_traits;
