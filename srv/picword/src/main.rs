use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use clap::{Arg, ArgMatches, Command};
use log::{info, warn};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

use picword::client::terminal;
use picword::handlers::{self, pages};
use picword::models::AppState;
use picword::services::image::PlaceholderImages;
use picword::services::store::GameStore;
use picword::services::word_list::{load_word_list, WordList};

// Function to initialize logging
fn init_logging(log_file: Option<&String>) -> io::Result<()> {
    let env = env_logger::Env::default().default_filter_or("info");
    if let Some(file) = log_file {
        let log_output = OpenOptions::new().create(true).append(true).open(file)?;

        env_logger::Builder::from_env(env)
            .target(env_logger::Target::Pipe(Box::new(log_output)))
            .init();
    } else {
        env_logger::Builder::from_env(env).init();
    }
    Ok(())
}

fn cli() -> Command {
    Command::new("picword")
        .version(env!("CARGO_PKG_VERSION"))
        .author("Ron Straight <straightre@gmail.com>")
        .about("Picture word guessing game server; `play` runs the terminal client")
        .arg(
            Arg::new("log-file")
                .long("log-file")
                .num_args(1)
                .help("Specify a log file path (if omitted, logs to stderr)"),
        )
        .arg(
            Arg::new("listen-host")
                .long("listen-host")
                .env("PICWORD_LISTEN")
                .num_args(1)
                .default_value("0.0.0.0:3000")
                .help("Specify the listen address (e.g., 0.0.0.0:3000)"),
        )
        .arg(
            Arg::new("share-dir")
                .long("share-dir")
                .num_args(1)
                .default_value("./share")
                .help("Directory containing the public/ client assets"),
        )
        .arg(
            Arg::new("word-list")
                .long("word-list")
                .num_args(1)
                .help("File with one phrase per line (built-in Vietnamese list if omitted)"),
        )
        .arg(
            Arg::new("image-api-key")
                .long("image-api-key")
                .env("NANA_BANANA_API_KEY")
                .hide_env_values(true)
                .num_args(1)
                .help("Image generation API key"),
        )
        .subcommand(
            Command::new("play")
                .about("Play in the terminal against a running server")
                .arg(
                    Arg::new("server")
                        .long("server")
                        .num_args(1)
                        .default_value("http://127.0.0.1:3000")
                        .help("Base URL of the game server"),
                ),
        )
}

async fn serve(matches: &ArgMatches) -> io::Result<()> {
    let listen_host = matches
        .get_one::<String>("listen-host")
        .cloned()
        .unwrap_or_else(|| "0.0.0.0:3000".to_string());
    let share_dir = matches
        .get_one::<String>("share-dir")
        .cloned()
        .unwrap_or_else(|| "./share".to_string());

    let words = match matches.get_one::<String>("word-list") {
        Some(path) => load_word_list(path)?,
        None => WordList::builtin(),
    };
    info!("Word list has {} phrases", words.len());

    let images = PlaceholderImages::new(matches.get_one::<String>("image-api-key").cloned());
    if !images.is_configured() {
        warn!("NANA_BANANA_API_KEY is not configured, every round uses a placeholder image");
    }

    let public_dir = pages::PublicDir(PathBuf::from(share_dir).join("public"));
    if !public_dir.0.join("index.html").is_file() {
        warn!("No index.html under {}, the browser client will not load", public_dir.0.display());
    }

    let state = web::Data::new(AppState {
        words,
        images: Box::new(images),
        store: GameStore::new(),
    });
    let public = web::Data::new(public_dir);

    info!("Picture guessing game server running on http://{}", listen_host);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(Cors::permissive())
            .app_data(state.clone())
            .app_data(public.clone())
            .configure(handlers::api)
            .service(pages::index)
            .service(pages::assets(&public))
    })
    .bind(&listen_host)?
    .run()
    .await
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    let matches = cli().get_matches();

    init_logging(matches.get_one::<String>("log-file"))?;

    match matches.subcommand() {
        Some(("play", sub)) => {
            let server = sub
                .get_one::<String>("server")
                .map(String::as_str)
                .unwrap_or("http://127.0.0.1:3000");
            terminal::play(server).await
        }
        _ => serve(&matches).await,
    }
}
