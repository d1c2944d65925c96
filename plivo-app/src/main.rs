//! plivo-app — small demo of the plivo helper crates.
//!
//! # Usage
//! ```text
//! plivo-app render
//! plivo-app validate <uri> <signature> [Name=Value ...]
//! plivo-app call <from> <to> <answer-url>
//! ```
//!
//! Credentials come from `PLIVO_AUTH_ID` / `PLIVO_AUTH_TOKEN`, the API root
//! from `PLIVO_URL`. `call` never touches the network: it prints the request
//! the REST client would send.

use std::convert::Infallible;
use std::env;
use std::process::ExitCode;

use plivo::rest::{HttpRequest, HttpResponse};
use plivo::xml::{Dial, GetDigits, Hangup, HttpMethod, Language, Response, Speak, Wait};
use plivo::{Config, Element, RequestValidator, RestClient, Transport, Verb};

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("plivo_app=info,plivo_rest=debug,plivo_crypto=debug"),
    )
    .init();

    match run(env::args().skip(1).collect()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("✗ {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Vec<String>) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = Config {
        base_url:   env::var("PLIVO_URL").unwrap_or_else(|_| Config::default().base_url),
        auth_id:    env::var("PLIVO_AUTH_ID").unwrap_or_default(),
        auth_token: env::var("PLIVO_AUTH_TOKEN").unwrap_or_default(),
    };

    match args.first().map(String::as_str) {
        Some("render") | None => {
            println!("{}", sample_menu()?.to_document());
            Ok(ExitCode::SUCCESS)
        }
        Some("validate") if args.len() >= 3 => {
            let fields: Vec<(&str, &str)> = args[3..]
                .iter()
                .filter_map(|kv| kv.split_once('='))
                .collect();
            let validator = RequestValidator::new(config.auth_id, config.auth_token);
            if validator.validate(&args[1], fields, &args[2]) {
                println!("✓ signature valid");
                Ok(ExitCode::SUCCESS)
            } else {
                println!("✗ signature mismatch");
                Ok(ExitCode::FAILURE)
            }
        }
        Some("call") if args.len() == 4 => {
            let client = RestClient::new(config, DryRun);
            client.call([
                ("From", args[1].as_str()),
                ("To", args[2].as_str()),
                ("AnswerUrl", args[3].as_str()),
            ])?;
            Ok(ExitCode::SUCCESS)
        }
        _ => {
            eprintln!("usage: plivo-app [render | validate <uri> <signature> [Name=Value ...] | call <from> <to> <answer-url>]");
            Ok(ExitCode::from(2))
        }
    }
}

/// A keypad menu: greet, ask for one digit, fall back to an operator.
fn sample_menu() -> Result<Element, plivo::MarkupError> {
    let mut doc = Response::new().into_element()?;
    doc.add(Speak::new("Thanks for calling.").language(Language::English))?;

    let menu = doc.add(
        GetDigits::new()
            .action("https://example.com/menu")
            .method(HttpMethod::Post)
            .num_digits(1)
            .timeout(7),
    )?;
    menu.add(Speak::new("Press 1 for sales, 2 for support."))?;
    menu.add(Wait::new().length(2))?;

    doc.add(Speak::new("Connecting you to an operator."))?;
    doc.add(Dial::new().number("1000, 1001"))?;
    doc.add(Hangup::new())?;
    log::info!("built sample menu with {} top-level verbs", doc.children().len());
    Ok(doc)
}

/// Prints each request instead of sending it.
struct DryRun;

impl Transport for DryRun {
    type Error = Infallible;

    fn send(&self, request: &HttpRequest) -> Result<HttpResponse, Self::Error> {
        println!("{} {}", request.method, request.url);
        for (name, value) in &request.headers {
            if name.eq_ignore_ascii_case("Authorization") {
                println!("{name}: Basic <redacted>");
            } else {
                println!("{name}: {value}");
            }
        }
        if let Some(body) = &request.body {
            println!("\n{body}");
        }
        Ok(HttpResponse { status: 200, body: Vec::new() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_menu_renders() {
        let xml = sample_menu().unwrap().to_xml();
        assert!(xml.starts_with("<Response><Speak language=\"en\">Thanks for calling.</Speak>"));
        assert!(xml.contains("<Dial><Number>1000</Number><Number>1001</Number></Dial>"));
        assert!(xml.ends_with("<Hangup/></Response>"));
    }
}
