use std::path::PathBuf;
use std::sync::Mutex;

use actix_web::{get, web, App, HttpResponse, HttpServer, Responder};
use clap::Parser;
use log::{error, info};
use serde::Deserialize;
use slide_gen_core::{LanguageModel, ModelConfig};

const DEFAULT_LENGTH: usize = 100;
/// Upper bound on `length`; generation holds the model lock throughout.
const MAX_LENGTH: usize = 100_000;

/// Serve text generated by a character model trained at startup.
#[derive(Parser, Debug)]
#[command(name = "slide-gen-server", version)]
struct Args {
	/// Corpus file to train on
	#[arg(long)]
	corpus: PathBuf,
	/// Number of characters in a window
	#[arg(long, default_value_t = 3)]
	window_length: usize,
	/// Seed for reproducible output
	#[arg(long)]
	seed: Option<u64>,
	#[arg(long, default_value = "127.0.0.1")]
	host: String,
	#[arg(long, default_value_t = 5000)]
	port: u16,
}

/// Query parameters of the `/v1/generate` endpoint
#[derive(Deserialize)]
struct GenerateParams {
	seed: Option<String>, // missing -> random known window
	length: Option<usize>,
}

struct SharedData {
	model: LanguageModel,
}

/// HTTP GET endpoint `/v1/generate`
///
/// Generates `length` characters after `seed` (or after a random known
/// window) and returns the whole text as the response body.
#[get("/v1/generate")]
async fn get_generated(data: web::Data<Mutex<SharedData>>, query: web::Query<GenerateParams>) -> impl Responder {
	let length = query.length.unwrap_or(DEFAULT_LENGTH);
	if length > MAX_LENGTH {
		return HttpResponse::BadRequest().body(format!("Length must be at most {MAX_LENGTH}"));
	}

	let mut shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};

	let seed = match &query.seed {
		Some(s) if !s.is_empty() => s.clone(),
		Some(_) => return HttpResponse::BadRequest().body("Seed cannot be empty"),
		None => match shared_data.model.random_window() {
			Some(window) => window,
			None => return HttpResponse::InternalServerError().body("Model has no windows"),
		},
	};

	HttpResponse::Ok().body(shared_data.model.generate(&seed, length))
}

/// HTTP GET endpoint `/v1/model`: text dump of every window.
#[get("/v1/model")]
async fn get_model(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().body(shared_data.model.to_text())
}

#[get("/v1/stats")]
async fn get_stats(data: web::Data<Mutex<SharedData>>) -> impl Responder {
	let shared_data = match data.lock() {
		Ok(m) => m,
		Err(_) => return HttpResponse::InternalServerError().body("Model lock failed"),
	};
	HttpResponse::Ok().json(shared_data.model.stats())
}

fn train(args: &Args) -> Result<LanguageModel, Box<dyn std::error::Error>> {
	let config = ModelConfig { window_length: args.window_length, seed: args.seed };
	let mut model = config.build()?;
	let steps = model.train_file(&args.corpus)?;
	info!("trained on {} ({} steps, {} windows)", args.corpus.display(), steps, model.len());
	Ok(model)
}

/// Main entry point for the server.
///
/// Trains the model once, wraps it in a `Mutex` (generation advances the
/// model's random source) and starts an Actix-web HTTP server.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
	let args = Args::parse();

	let model = match train(&args) {
		Ok(model) => model,
		Err(e) => {
			error!("failed to train model: {e}");
			return Err(std::io::Error::other(e.to_string()));
		}
	};
	let shared_model = web::Data::new(Mutex::new(SharedData { model }));

	info!("listening on {}:{}", args.host, args.port);
	HttpServer::new(move || {
		App::new()
			.app_data(shared_model.clone())
			.service(get_generated)
			.service(get_model)
			.service(get_stats)
	})
		.bind((args.host.as_str(), args.port))?
		.run()
		.await
}
