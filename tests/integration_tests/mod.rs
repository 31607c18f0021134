mod config;
mod routing;
mod shared;
