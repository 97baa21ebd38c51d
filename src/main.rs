// SPDX-License-Identifier: MPL-2.0
use major_match_i18n::config::{FilePreferenceStore, MemoryPreferenceStore, PreferenceStore};
use major_match_i18n::i18n::Catalog;
use major_match_i18n::manager::LanguageManager;
use major_match_i18n::reason::Reason;
use major_match_i18n::view::{Element, ElementKind, Page, LANGUAGE_TOGGLE_ID};
use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;
use std::rc::Rc;
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
major-match-i18n

USAGE:
  major-match-i18n [OPTIONS] <COMMAND> [ARGS...]

COMMANDS:
  tr <key> [name=value...]   Translate a key
  reason <text>              Rewrite a backend reason string
  reasons <text>             Localize each highlight of a reason string
  reason-json <json>         Localize a structured reason
  toggle                     Switch between English and Arabic
  keys                       List the keys of the active language
  page                       Render the sample landing page

OPTIONS:
  --lang <code>              Select and persist a language (en, ar)
  --config <path>            Settings file to use
  --memory                   Do not persist the language
  -h, --help                 Print this help
";

type CliResult<T> = std::result::Result<T, Box<dyn std::error::Error>>;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> CliResult<()> {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let lang: Option<String> = args.opt_value_from_str("--lang")?;
    let config_path: Option<PathBuf> = args.opt_value_from_str("--config")?;
    let in_memory = args.contains("--memory");
    let command = args.subcommand()?;
    let rest = free_args(args.finish())?;

    let store: Box<dyn PreferenceStore> = match (in_memory, config_path) {
        (true, _) => Box::new(MemoryPreferenceStore::new()),
        (false, Some(path)) => Box::new(FilePreferenceStore::new(path)),
        (false, None) => match FilePreferenceStore::user() {
            Some(store) => Box::new(store),
            None => Box::new(MemoryPreferenceStore::new()),
        },
    };

    let catalog = Rc::new(Catalog::embedded()?);
    let mut manager = LanguageManager::new(catalog, store);
    if let Some(code) = lang {
        manager.select(&code);
    }

    match command.as_deref() {
        Some("tr") => {
            let (key, params) = rest.split_first().ok_or("tr needs a key")?;
            let params = params
                .iter()
                .map(|pair| pair.split_once('=').ok_or_else(|| format!("expected name=value, got {pair}")))
                .collect::<Result<Vec<_>, _>>()?;
            println!("{}", manager.translate_with(key, &params));
        }
        Some("reason") => println!("{}", manager.translate_reason(&rest.join(" "))),
        Some("reasons") => println!("{}", manager.localize_reasons(&rest.join(" "))),
        Some("reason-json") => {
            let reason: Reason = serde_json::from_str(&rest.join(" "))?;
            println!("{}", manager.localize_reason(&reason));
        }
        Some("toggle") => {
            let mut page = Page::new();
            println!("{}", manager.toggle(&mut page));
        }
        Some("keys") => {
            for key in manager.catalog().keys(manager.current()) {
                println!("{key}");
            }
        }
        Some("page") => {
            let mut page = landing_page();
            manager.initialize(&mut page);
            print_page(&page);
        }
        Some(other) => return Err(format!("unknown command: {other}").into()),
        None => print!("{HELP}"),
    }

    Ok(())
}

fn free_args(args: Vec<OsString>) -> CliResult<Vec<String>> {
    args.into_iter()
        .map(|arg| {
            arg.into_string().map_err(|arg| {
                Box::<dyn std::error::Error>::from(format!("argument is not valid UTF-8: {arg:?}"))
            })
        })
        .collect()
}

fn landing_page() -> Page {
    // (tag, input type, translation key)
    const MARKUP: &[(&str, Option<&str>, &str)] = &[
        ("h1", None, "findMajor"),
        ("p", None, "subtitle"),
        ("a", None, "scienceStream"),
        ("a", None, "literaryStream"),
        ("input", Some("text"), "otherSkills"),
        ("input", Some("submit"), "getRecommendations"),
    ];

    let mut page = Page::new()
        .with_title_key("title")
        .with_element(Element::new(ElementKind::from_tag("button", None)).with_id(LANGUAGE_TOGGLE_ID));
    for (tag, input_type, key) in MARKUP {
        page.push(Element::new(ElementKind::from_tag(tag, *input_type)).with_key(*key));
    }
    page
}

fn print_page(page: &Page) {
    println!(
        "lang={} dir={} title={}",
        page.lang.as_deref().unwrap_or(""),
        page.dir.map(|dir| dir.as_str()).unwrap_or(""),
        page.title
    );
    for element in page.elements() {
        let label = element
            .translate_key
            .as_deref()
            .or(element.id.as_deref())
            .unwrap_or("-");
        let content = element
            .placeholder
            .as_deref()
            .or(element.value.as_deref())
            .unwrap_or(element.text.as_str());
        println!("  {label}: {content}");
    }
}
