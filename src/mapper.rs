//! Map a source-relative path to its English destination components.
use crate::config::EnlinkConfig;
use crate::overrides::OverrideSet;
use crate::translate::{KnownExtensions, Romanizer, RuleTable, Translator};

#[derive(Debug)]
pub struct PathMapper {
    translator: Translator,
    overrides: OverrideSet,
}

impl PathMapper {
    pub fn new(translator: Translator, overrides: OverrideSet) -> Self {
        Self {
            translator,
            overrides,
        }
    }

    /// Built-in tables extended by `config`; config entries take precedence.
    pub fn from_config(config: &EnlinkConfig, romanizer: Box<dyn Romanizer>) -> Self {
        let mut rules = RuleTable::builtin();
        rules.prepend(&config.rules);
        let mut extensions = KnownExtensions::builtin();
        extensions.extend(&config.extensions);
        let mut overrides = OverrideSet::builtin();
        overrides.prepend(&config.overrides);
        Self::new(Translator::new(rules, extensions, romanizer), overrides)
    }

    pub fn translator(&self) -> &Translator {
        &self.translator
    }

    pub fn overrides(&self) -> &OverrideSet {
        &self.overrides
    }

    /// Translate every component; the last one is the file name.
    ///
    /// Directories always go through the translator. The file name takes an
    /// override when its directory chain has one.
    pub fn map_components(&self, parts: &[String]) -> Vec<String> {
        let Some((file_name, dirs)) = parts.split_last() else {
            return Vec::new();
        };
        let mut mapped: Vec<String> = dirs
            .iter()
            .map(|dir| self.translator.translate(dir))
            .collect();
        let name = match self.overrides.resolve(dirs, &mapped, file_name) {
            Some(literal) => literal.to_string(),
            None => self.translator.translate(file_name),
        };
        mapped.push(name);
        mapped
    }
}
