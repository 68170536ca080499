//! Routes the `log` facade to the browser console.
use log::{Level, LevelFilter, Log, Metadata, Record};

#[derive(Debug, Clone, Copy)]
pub struct Config {
	level: LevelFilter,
	prefer_target: bool,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			level: match cfg!(debug_assertions) {
				true => LevelFilter::Debug,
				false => LevelFilter::Info,
			},
			prefer_target: false,
		}
	}
}

impl Config {
	/// Prefix lines with the record's target instead of its module path.
	pub fn prefer_target(mut self) -> Self {
		self.prefer_target = true;
		self
	}
}

struct ConsoleLogger(Config);

impl ConsoleLogger {
	fn format(&self, record: &Record) -> String {
		let origin = match self.0.prefer_target {
			true => record.target(),
			false => record.module_path().unwrap_or_else(|| record.target()),
		};
		format!("[{}] {origin}: {}", record.level(), record.args())
	}
}

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.0.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		let line = wasm_bindgen::JsValue::from(self.format(record));
		match record.level() {
			Level::Error => web_sys::console::error_1(&line),
			Level::Warn => web_sys::console::warn_1(&line),
			Level::Info => web_sys::console::info_1(&line),
			Level::Debug => web_sys::console::debug_1(&line),
			Level::Trace => web_sys::console::log_1(&line),
		}
	}

	fn flush(&self) {}
}

pub fn init(config: Config) {
	let level = config.level;
	if log::set_boxed_logger(Box::new(ConsoleLogger(config))).is_ok() {
		log::set_max_level(level);
	}
}
