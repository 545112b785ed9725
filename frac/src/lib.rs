//! The frac app: an exact fraction calculator. For the arithmetic itself, see
//! [libfrac's documentation](libfrac).

#[cfg(test)]
mod test;

mod diagnostics;
use diagnostics::emit_eval_error;

mod emit;
pub use emit::{Emit, OutputForm, UnknownOutputForm};

mod eval;
pub use eval::{base_name, evaluate, EvalError, EvalErrorKind, Span, MAX_NESTING};

use libfrac::FractionBase;
use tracing::debug;

/// Integer bases a program can be evaluated in.
pub const BASES: [&str; 10] = [
    "i8", "i16", "i32", "i64", "i128", "u8", "u16", "u32", "u64", "u128",
];

/// Options to run frac with.
pub struct Opts {
    /// Fraction expression to evaluate.
    pub program: String,
    /// Integer base of every fraction in the program; one of [BASES].
    pub base: String,
    /// How the result of the program should be emitted.
    pub output_form: String,
    /// When true, diagnostics will be colored.
    pub color: bool,
}

/// Parses [Opts](self::Opts) from the command line or given a parser that acts on the clap
/// [App](clap::App).
pub fn get_opts<P>(parser: P, color: bool) -> Result<Opts, clap::Error>
where
    P: for<'a> FnOnce(clap::App<'a, '_>) -> Result<clap::ArgMatches<'a>, clap::Error>,
{
    let matches = clap::App::new(clap::crate_name!())
        .version(clap::crate_version!())
        .about(clap::crate_description!())
        .author(clap::crate_authors!())
        .arg(
            clap::Arg::with_name("program")
                .help("Fraction expression to evaluate, like \"1/2 + 3/4\"")
                .required(true)
                .allow_hyphen_values(true),
        )
        .arg(
            clap::Arg::with_name("base")
                .short("b")
                .long("base")
                .help("Integer type of every numerator and denominator in the program.")
                .default_value("i64")
                .takes_value(true)
                .possible_values(&BASES),
        )
        .arg(
            clap::Arg::with_name("output-form")
                .short("o")
                .long("output-form")
                .next_line_help(true)
                .help(
                    "frac emit format. Possible values:\n\
                    \tfraction: Canonical numerator/denominator, like \"3/2\".\n\
                    \tdecimal:  Nearest double, like \"1.5\".\n\
                    \tinteger:  Integer part, truncated toward zero, like \"1\".\n\
                    \tdebug:    Opaque internal representation. Note: this format is not stable.\n\
                    ",
                )
                .hide_possible_values(true)
                .default_value("fraction")
                .takes_value(true)
                .possible_values(&["fraction", "decimal", "integer", "debug"]),
        );
    let matches = parser(matches)?;

    Ok(Opts {
        program: matches.value_of("program").unwrap_or_default().into(),
        base: matches.value_of("base").unwrap_or("i64").into(),
        output_form: matches.value_of("output-form").unwrap_or("fraction").into(),
        color,
    })
}

/// Output of a frac execution.
#[derive(Default, Debug, PartialEq)]
pub struct FracResult {
    /// Exit code
    pub code: i32,
    /// Emit for stdout
    pub stdout: String,
    /// Emit for stderr
    pub stderr: String,
}

/// Builds a [FracResult](self::FracResult).
struct FracResultBuilder<'a> {
    program: &'a str,
    color: bool,
    stdout: String,
    stderr: String,
}

impl<'a> FracResultBuilder<'a> {
    fn new(program: &'a str, color: bool) -> Self {
        Self {
            program,
            color,
            stdout: String::new(),
            stderr: String::new(),
        }
    }

    /// Evaluates the program in base `N` and emits its result or diagnostic.
    fn eval<N: FractionBase>(mut self, form: OutputForm) -> FracResult {
        match evaluate::<N>(self.program) {
            Ok(value) => {
                self.stdout.push_str(&value.emit(form));
                self.ok()
            }
            Err(error) => {
                debug!(%error, span = ?error.span, "evaluation failed");
                self.stderr
                    .push_str(&emit_eval_error(self.program, &error, self.color));
                self.failed()
            }
        }
    }

    fn err(mut self, msg: impl std::fmt::Display) -> FracResult {
        self.stderr.push_str(&format!("error: {}", msg));
        self.failed()
    }

    fn ok(self) -> FracResult {
        FracResult {
            code: 0,
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }

    fn failed(self) -> FracResult {
        FracResult {
            code: 1,
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }
}

/// Runs frac end-to-end.
pub fn run_frac(opts: Opts) -> FracResult {
    let result = FracResultBuilder::new(&opts.program, opts.color);

    let form = match opts.output_form.parse::<OutputForm>() {
        Ok(form) => form,
        Err(err) => return result.err(err),
    };

    macro_rules! eval_in_base {
        ($($base:ident)*) => {
            match opts.base.as_str() {
                $(name if name == stringify!($base) => result.eval::<$base>(form),)*
                other => result.err(format!("`{}` is not a supported base", other)),
            }
        }
    }

    eval_in_base!(i8 i16 i32 i64 i128 u8 u16 u32 u64 u128)
}
