use anyhow::{Result, anyhow};
use swc_common::{BytePos, FileName, SourceMap, Span, Spanned};
use swc_ecma_ast::Module;
use swc_ecma_parser::{Parser, StringInput, Syntax, TsSyntax};

/// A parsed script together with the text it was parsed from.
///
/// Spans in `module` are absolute positions in `source_map`; use
/// [`ParsedScript::snippet`] to turn them back into source text.
pub struct ParsedScript {
    pub module: Module,
    pub source_map: SourceMap,
    pub source: String,
    start_pos: BytePos,
}

impl ParsedScript {
    /// Source text covered by `span`, or `None` for spans outside this file.
    pub fn snippet(&self, span: Span) -> Option<&str> {
        let lo = span.lo.0.checked_sub(self.start_pos.0)? as usize;
        let hi = span.hi.0.checked_sub(self.start_pos.0)? as usize;
        self.source.get(lo..hi)
    }
}

/// Parse a script body into an AST.
///
/// TypeScript and JSX syntax are always enabled so one configuration covers
/// `.js`, `.jsx`, `.ts`, `.tsx` and the script blocks of single-file
/// components. The body is parsed as an ES module.
///
/// Errors the parser recovered from are still treated as fatal.
pub fn parse_script_source(code: String, file_path: &str) -> Result<ParsedScript> {
    let code = match code.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => code,
    };

    let source_map = SourceMap::default();
    let source_file =
        source_map.new_source_file(FileName::Real(file_path.into()).into(), code.clone());

    let syntax = Syntax::Typescript(TsSyntax {
        tsx: true,
        decorators: true,
        ..Default::default()
    });
    let mut parser = Parser::new(syntax, StringInput::from(&*source_file), None);

    let module = parser
        .parse_module()
        .map_err(|e| describe_error(&source_map, file_path, e.span(), &e.kind().msg()))?;

    if let Some(e) = parser.take_errors().into_iter().next() {
        return Err(describe_error(
            &source_map,
            file_path,
            e.span(),
            &e.kind().msg(),
        ));
    }

    Ok(ParsedScript {
        module,
        start_pos: source_file.start_pos,
        source_map,
        source: code,
    })
}

fn describe_error(source_map: &SourceMap, file_path: &str, span: Span, msg: &str) -> anyhow::Error {
    if span.is_dummy() {
        return anyhow!("Failed to parse {}: {}", file_path, msg);
    }
    let loc = source_map.lookup_char_pos(span.lo);
    anyhow!(
        "Failed to parse {}:{}:{}: {}",
        file_path,
        loc.line,
        loc.col_display + 1,
        msg
    )
}
