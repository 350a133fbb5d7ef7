//! Usage text

/// One-line synopsis, the first line of the usage text
pub const SYNOPSIS: &str = "shade [--console] [--liststyles | [--output=<kind>]... [--style=<style>] [--language=<name>] files...]";

/// Full usage text printed for `--help` or when no files are given
pub fn usage() -> String {
    format!(
        "{SYNOPSIS}

Options:
  --output=<kind>     Output kind, repeatable (default: html)
                        html, rtf, terminal256, console256, 256,
                        terminal16, console16, 16m
                        (bbcode and latex are accepted but not yet produced)
  --style=<style>     Color style (default: scite, see --liststyles)
  --language=<name>   Language name or extension (default: detect from file)
  --console, --c      Write terminal output to the console instead of <file>.ans
  --liststyles        Print the available styles (only without files)
  --config=<path>     Read defaults from this file instead of ./shade.toml
  --color=<when>      Color diagnostics: auto, always, never
  --help, --h, --?    Show this help

Output files are written next to each input: <file>.html, <file>.rtf, <file>.ans
"
    )
}
