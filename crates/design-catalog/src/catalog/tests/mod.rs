mod common;
mod compare;
mod routing;
mod stats;
