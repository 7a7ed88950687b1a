use colored::Colorize;

pub struct Theme {
    pub title: fn(&str) -> String,
    pub label: fn(&str) -> String,
    pub source: fn(&str) -> String,
    pub translation: fn(&str) -> String,
    pub line: fn(&str) -> String,
    pub ok: fn(&str) -> String,
    pub warn: fn(&str) -> String,
}

impl Theme {
    pub fn from_name(name: &str) -> Self {
        match name {
            "temp" | "" => Self::temp(),
            "canvas" => Self::canvas(),
            "plain" => Self::plain(),
            _ => {
                eprintln!("{}", format!("✘ Unknown theme: {}", name).red());
                Self::temp()
            }
        }
    }

    fn temp() -> Self {
        Self {
            title: |s| s.bright_magenta().bold().underline().to_string(),
            label: |s| s.cyan().to_string(),
            source: |s| s.bright_white().dimmed().italic().to_string(),
            translation: |s| s.yellow().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            ok: |s| s.green().to_string(),
            warn: |s| s.red().to_string(),
        }
    }

    fn canvas() -> Self {
        Self {
            title: |s| s.blue().bold().underline().to_string(),
            label: |s| s.magenta().to_string(),
            source: |s| s.bright_black().italic().to_string(),
            translation: |s| s.black().to_string(),
            line: |s| s.bright_black().dimmed().to_string(),
            ok: |s| s.green().bold().to_string(),
            warn: |s| s.red().bold().to_string(),
        }
    }

    fn plain() -> Self {
        Self {
            title: |s| s.to_string(),
            label: |s| s.to_string(),
            source: |s| s.to_string(),
            translation: |s| s.to_string(),
            line: |s| s.to_string(),
            ok: |s| s.to_string(),
            warn: |s| s.to_string(),
        }
    }
}
