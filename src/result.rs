use nom::IResult;
use nom_language::error::VerboseError;
use nom_locate::LocatedSpan;

/// Located input of the tokenizer.
pub type Span<'a> = LocatedSpan<&'a str>;

pub type LexResult<'a, O> = IResult<Span<'a>, O, VerboseError<Span<'a>>>;
