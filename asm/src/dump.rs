use arch::Tables;
use color_print::cformat;

use crate::{lexer::split_comment, parser::is_symbol, Assembly, SymbolKind, SymbolTable};

const RULE: &str = "-------+------------------+-----------------------------------------";

pub fn print_listing(source: &str, assembly: &Assembly) {
    let tables = Tables::get();
    let mut code = assembly.code().iter().enumerate().peekable();

    println!("{}", RULE);
    for (idx, raw) in source.lines().enumerate() {
        let line_num = idx + 1;
        let (text, comment) = split_comment(raw);
        let comment_str = comment
            .map(|s| cformat!("<dim>//{}</>", s))
            .unwrap_or_default();

        let body = match code.next_if(|(_, enc)| enc.idx == idx) {
            Some((pc, enc)) => format!(
                "{} {} | {:>4}:   {} {}",
                cformat!("<g>[{:04X}]</>", pc),
                enc.inst.to_bits(),
                line_num,
                enc.inst.cformat(tables),
                comment_str
            ),
            None => {
                let text = text.trim();
                let label = text
                    .strip_prefix('(')
                    .and_then(|t| t.strip_suffix(')'))
                    .filter(|name| is_symbol(name));
                match label {
                    Some(name) => {
                        let label = cformat!("<m>({})</>", name);
                        format!("{:25}| {:>4}: {} {}", "", line_num, label, comment_str)
                    }
                    None => format!("{:25}| {:>4}: {} {}", "", line_num, text, comment_str),
                }
            }
        };
        println!("{}", body.trim_end());
    }
    println!("{}", RULE);
}

pub fn print_symbols(symbols: &SymbolTable) {
    for (name, symbol) in symbols.iter() {
        let kind = match symbol.kind {
            SymbolKind::Predefined => continue,
            SymbolKind::Label => cformat!("<m>label   </>"),
            SymbolKind::Variable => cformat!("<c>variable</>"),
        };
        println!("{} 0x{:04X} {:>5} {}", kind, symbol.addr, symbol.addr, name);
    }
    println!("{}", RULE);
}
