use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "masm.pest"]
pub struct MasmParser;
