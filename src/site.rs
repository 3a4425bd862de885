//! Page content: the data the components render, and the embedded-JSON loader.
//!
//! Content lives in a `<script type="application/json" id="site-data">`
//! element so the page can be re-skinned without recompiling. Every field
//! falls back to a compiled default, so a missing or partial element leaves
//! the site fully functional.

use log::{info, warn};
use serde::{Deserialize, Deserializer};
use wasm_bindgen::JsCast;
use web_sys::HtmlScriptElement;

/// One animated statistic in the about section.
#[derive(Clone, Debug, Deserialize)]
pub struct Stat {
	pub label: String,
	/// Value the counter lands on.
	pub target: u32,
}

/// One skill card with its proficiency bar.
#[derive(Clone, Debug, Deserialize)]
pub struct Skill {
	pub name: String,
	/// Bar width in percent, 0–100.
	pub percent: u32,
	/// Maximum tilt in degrees for this card; `None` uses the default.
	#[serde(default)]
	pub tilt_max: Option<f64>,
}

/// An outbound contact link.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactLink {
	pub label: String,
	pub href: String,
}

/// Everything the page renders that is content rather than behavior.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteData {
	/// Display name, also the intro logo initial.
	pub name: String,
	/// Static lead-in before the typewriter span.
	pub tagline: String,
	/// Words the typewriter headline cycles through.
	#[serde(deserialize_with = "words_or_default")]
	pub words: Vec<String>,
	pub stats: Vec<Stat>,
	pub skills: Vec<Skill>,
	/// Lines of the fake terminal in the about section.
	pub terminal_lines: Vec<String>,
	pub contact: Vec<ContactLink>,
}

impl Default for SiteData {
	fn default() -> Self {
		Self {
			name: "Your Name".into(),
			tagline: "I build playful things for the web.".into(),
			words: default_words(),
			stats: vec![
				Stat {
					label: "Projects Completed".into(),
					target: 50,
				},
				Stat {
					label: "Years Experience".into(),
					target: 5,
				},
				Stat {
					label: "Happy Clients".into(),
					target: 30,
				},
			],
			skills: vec![
				Skill {
					name: "JavaScript".into(),
					percent: 90,
					tilt_max: None,
				},
				Skill {
					name: "Rust".into(),
					percent: 85,
					tilt_max: None,
				},
				Skill {
					name: "WebAssembly".into(),
					percent: 80,
					tilt_max: Some(14.0),
				},
				Skill {
					name: "UI Design".into(),
					percent: 75,
					tilt_max: None,
				},
			],
			terminal_lines: [
				"$ whoami",
				"creative-developer",
				"$ ls skills/",
				"frontend  backend  design",
				"$ cat motto.txt",
				"Make it work, make it right, make it fun.",
			]
			.into_iter()
			.map(String::from)
			.collect(),
			contact: vec![
				ContactLink {
					label: "GitHub".into(),
					href: "https://github.com".into(),
				},
				ContactLink {
					label: "LinkedIn".into(),
					href: "https://www.linkedin.com".into(),
				},
				ContactLink {
					label: "Email".into(),
					href: "mailto:hello@example.com".into(),
				},
			],
		}
	}
}

impl SiteData {
	/// First character of the display name, for the intro logo faces.
	pub fn initial(&self) -> String {
		self.name.chars().next().map(String::from).unwrap_or_default()
	}
}

/// Stock headline words, shared by the defaults and the empty-list fallback.
fn default_words() -> Vec<String> {
	[
		"Creative",
		"Developer",
		"Designer",
		"Innovator",
		"Tech Enthusiast",
		"Problem Solver",
	]
	.into_iter()
	.map(String::from)
	.collect()
}

/// Treat an explicitly empty `words` array like an absent field, so the
/// headline always has something to cycle.
fn words_or_default<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
	D: Deserializer<'de>,
{
	let words = Vec::<String>::deserialize(deserializer)?;
	Ok(if words.is_empty() { default_words() } else { words })
}

/// Load site content from a script element with id="site-data".
/// Expected format: JSON mirroring [`SiteData`]; absent fields keep defaults.
pub fn load_site_data() -> Option<SiteData> {
	let window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-data")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match serde_json::from_str::<SiteData>(&json_text) {
		Ok(data) => {
			info!(
				"folio-fx: loaded site data ({} words, {} skills)",
				data.words.len(),
				data.skills.len()
			);
			Some(data)
		}
		Err(e) => {
			warn!("folio-fx: failed to parse site data: {}", e);
			None
		}
	}
}
