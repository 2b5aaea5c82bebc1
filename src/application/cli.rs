#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::io;
use std::io::IsTerminal;
use std::io::Read;

use anyhow::Context;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use strum::VariantNames;
use tokio::fs;

use crate::configuration::Config;
use crate::domain::models::Language;
use crate::domain::services::LanguageRegistry;

/// What the workbench starts with: explicit language picks (falling back to
/// the persisted preference pair when absent) and the input code, when any
/// was provided ahead of time.
pub struct Launch {
    pub source: Option<Language>,
    pub target: Option<Language>,
    pub input: Option<String>,
}

pub fn build() -> Command {
    return Command::new("codeshift")
        .about("Translate source code between languages with Gemini, right from your terminal")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("file")
                .help("File to convert. Reads stdin when piped, or the source language's sample when omitted")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("source")
                .short('s')
                .long("source")
                .help("Language the input code is written in")
                .value_parser(PossibleValuesParser::new(Language::VARIANTS)),
        )
        .arg(
            Arg::new("target")
                .short('t')
                .long("target")
                .help("Language to convert the input code to")
                .value_parser(PossibleValuesParser::new(Language::VARIANTS)),
        )
        .arg(
            Arg::new("list-languages")
                .long("list-languages")
                .help("Print the supported languages and exit")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("snippets")
                .long("snippets")
                .value_name("LANGUAGE")
                .help("Print the authoring snippets for a language and exit")
                .value_parser(PossibleValuesParser::new(Language::VARIANTS)),
        )
        .arg(
            Arg::new("model")
                .long("model")
                .help("Gemini model used for conversions")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("gemini-token")
                .long("gemini-token")
                .env("GEMINI_API_KEY")
                .help("Gemini API key")
                .value_parser(value_parser!(String)),
        )
        .arg(
            Arg::new("config-file")
                .short('c')
                .long("config-file")
                .help("Path to a configuration file")
                .value_parser(value_parser!(String)),
        );
}

/// Returns `None` when the invocation was fully handled here and the
/// workbench should not start.
pub async fn parse() -> Result<Option<Launch>> {
    let matches = build().get_matches();
    Config::load(&matches).await?;

    if matches.get_flag("list-languages") {
        for language in LanguageRegistry::all() {
            println!("{language}");
        }
        return Ok(None);
    }

    if let Some(id) = matches.get_one::<String>("snippets") {
        let profile = LanguageRegistry::get(Language::parse(id)?);
        for snippet in profile.snippets {
            println!("{trigger}:\n{body}\n", trigger = snippet.trigger, body = snippet.body);
        }
        return Ok(None);
    }

    let source = matches
        .get_one::<String>("source")
        .map(|id| return Language::parse(id))
        .transpose()?;
    let target = matches
        .get_one::<String>("target")
        .map(|id| return Language::parse(id))
        .transpose()?;
    let input = resolve_input(matches.get_one::<String>("file")).await?;

    return Ok(Some(Launch {
        source,
        target,
        input,
    }));
}

async fn resolve_input(file: Option<&String>) -> Result<Option<String>> {
    if let Some(path) = file {
        if path != "-" {
            let text = fs::read_to_string(path)
                .await
                .with_context(|| return format!("failed to read {path}"))?;
            return Ok(Some(text));
        }
        return Ok(Some(read_stdin()?));
    }

    if !io::stdin().is_terminal() {
        return Ok(Some(read_stdin()?));
    }

    return Ok(None);
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer)?;
    return Ok(buffer);
}
