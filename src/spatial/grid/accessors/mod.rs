mod current;
mod scratch;
