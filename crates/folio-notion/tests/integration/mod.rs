mod blocks;
mod query;
