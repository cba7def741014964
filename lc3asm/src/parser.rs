use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "lc3.pest"]
pub struct Lc3Parser;
