//! Glyph and phrase constants for the code rain.

/// Characters drawn along the falling columns.
pub const GLYPHS: &[char] = &[
    '{', '}', '(', ')', '<', '>', ' ', '=', '+', '-', '*', '/', ';', ':', ',', '[', ']', '#', '@',
    '%', '$', '&', '|', '~', '^', '!', '?',
];

/// Short code lines shown by the rotating snippets.
pub const PHRASES: &[&str] = &[
    "function init() {",
    "const pi = 3.14;",
    "let i = 0;",
    "console.log(\"Hello PPH\")",
    "return true;",
    "await fetch(url)",
    "for (let x of xs) {",
    "class Prodigy {}",
    "if (ready) start();",
    "export default App;",
];
