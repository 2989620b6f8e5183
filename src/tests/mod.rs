pub mod common;

#[cfg(test)]
mod snapshot_build;
