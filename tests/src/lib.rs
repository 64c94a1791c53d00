//! End-to-end tests running whole map files through the analysis.

#[cfg(test)]
mod map;
