mod export;
mod record;
mod stats;
mod validate;
