mod failures;
mod fixtures;
mod success;
