use std::collections::{HashMap, HashSet};

/// Words Lua will not accept as identifiers, plus globals a generated program relies on.
pub const LUA_RESERVED_WORDS: &[&str] = &[
    "_", "__inext", "assert", "bit", "colors", "colours", "coroutine", "disk", "dofile", "error",
    "fs", "getfenv", "getmetatable", "gps", "help", "io", "ipairs", "keys", "loadfile",
    "loadstring", "math", "native", "next", "os", "paintutils", "pairs", "parallel", "pcall",
    "peripheral", "print", "printError", "rawequal", "rawget", "rawset", "read", "rednet",
    "redstone", "rs", "select", "setfenv", "setmetatable", "sleep", "string", "table", "term",
    "textutils", "tonumber", "tostring", "turtle", "type", "unpack", "vector", "write", "xpcall",
    "_VERSION", "__index", "and", "break", "do", "else", "elseif", "end", "false", "for",
    "function", "goto", "if", "in", "local", "nil", "not", "or", "repeat", "return", "then",
    "true", "until", "while",
];

/// Naming service consulted by emitters and the helper registry.
pub trait NameResolver {
    /// Identifier for a user variable. Stable for the same variable within a pass.
    fn variable_name(&mut self, name: &str) -> String;

    /// A fresh identifier close to `desired` that collides with nothing handed out so far.
    fn distinct_name(&mut self, desired: &str) -> String;

    /// Forget every name handed out. Reserved words survive.
    fn reset(&mut self);
}

#[derive(Debug, Clone)]
pub struct NameDatabase {
    reserved: HashSet<String>,
    variables: HashMap<String, String>,
    used: HashSet<String>,
}

impl NameDatabase {
    pub fn new() -> Self {
        Self::with_reserved_words(std::iter::empty::<&str>())
    }

    /// Lua's reserved words plus `extra`.
    pub fn with_reserved_words<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut reserved: HashSet<String> =
            LUA_RESERVED_WORDS.iter().map(|w| w.to_string()).collect();
        reserved.extend(extra.into_iter().map(|w| w.as_ref().to_string()));

        Self {
            reserved,
            variables: HashMap::new(),
            used: HashSet::new(),
        }
    }

    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved.contains(name)
    }

    /// Turn arbitrary text into something Lua accepts as an identifier.
    pub fn safe_name(name: &str) -> String {
        let mut safe: String = name
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
            .collect();

        if safe.is_empty() {
            safe = "unnamed".to_string();
        } else if safe.starts_with(|c: char| c.is_ascii_digit()) {
            safe.insert_str(0, "my_");
        }
        safe
    }

    fn claim(&mut self, desired: &str) -> String {
        let base = Self::safe_name(desired);
        let mut candidate = base.clone();
        let mut suffix = 2;

        while self.used.contains(&candidate) || self.is_reserved(&candidate) {
            candidate = format!("{}{}", base, suffix);
            suffix += 1;
        }

        self.used.insert(candidate.clone());
        candidate
    }
}

impl Default for NameDatabase {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver for NameDatabase {
    fn variable_name(&mut self, name: &str) -> String {
        // Editor variable names are case-insensitive.
        let key = name.to_lowercase();
        if let Some(existing) = self.variables.get(&key) {
            return existing.clone();
        }

        let emitted = self.claim(name);
        self.variables.insert(key, emitted.clone());
        emitted
    }

    fn distinct_name(&mut self, desired: &str) -> String {
        self.claim(desired)
    }

    fn reset(&mut self) {
        self.variables.clear();
        self.used.clear();
    }
}
