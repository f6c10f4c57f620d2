use std::collections::HashMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each explicitly given setting came from, keyed by config key.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	by_key: HashMap<&'static str, SettingSource>,
}

impl ConfigSources {
	/// Source for `key`; defaults are reported as the config key itself.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		self.by_key
			.get(key)
			.cloned()
			.unwrap_or(SettingSource::ConfigKey(key))
	}
}

impl FromIterator<(&'static str, Option<SettingSource>)> for ConfigSources {
	fn from_iter<I: IntoIterator<Item = (&'static str, Option<SettingSource>)>>(iter: I) -> Self {
		let by_key = iter
			.into_iter()
			.filter_map(|(key, source)| source.map(|source| (key, source)))
			.collect();
		Self { by_key }
	}
}
