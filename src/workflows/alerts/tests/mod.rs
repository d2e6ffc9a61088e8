mod common;
mod formatting;
