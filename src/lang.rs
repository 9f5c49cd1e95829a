//! Mapping from markdown code block languages to VSCode language identifiers.
//!
//! A snippet whose code block declares a language is only offered in files VSCode recognises as
//! that language. Tags follow GitHub linguist names; identifiers follow VSCode's known language
//! identifiers. Tags missing from the table are passed through so that languages contributed by
//! editor extensions still work.

/// Editor scope(s) for a lowercase markdown language tag, if the tag is known.
#[must_use]
pub fn vscode_scope(lang: &str) -> Option<&'static str> {
    let scope = match lang {
        "abap" => "abap",
        "bat" => "bat",
        "bibtex" => "bibtex",
        "c" => "c",
        "c++" | "cpp" => "cpp",
        "csharp" | "c#" | "cake" | "cakescript" => "csharp",
        "clojure" => "clojure",
        "coffeescript" | "coffee-script" | "coffee" => "coffeescript",
        "css" => "css,less,scss",
        "dockerfile" => "dockerfile",
        "fsharp" | "f#" => "fsharp",
        "go" => "go",
        "groovy" => "groovy",
        "haml" => "haml",
        "handlebars" | "hbs" => "handlebars",
        "html" | "xhtml" => "html",
        "ini" => "ini",
        "java" => "java",
        "javascript" | "js" | "node" => "javascript,javascriptreact",
        "jsx" => "javascript,javascriptreact,jsx",
        "json" => "json,jsonc",
        "jsonc" => "jsonc",
        "latex" => "latex",
        "less" => "less",
        "lua" => "lua",
        "makefile" | "make" | "mf" | "bsdmake" => "makefile",
        "obj-c" | "objc" | "objectivec" => "objective-c",
        "obj-c++" | "objc++" | "objectivec++" => "objective-cpp",
        "perl" => "perl",
        "perl6" => "perl6",
        "plaintext" => "plaintext",
        "powershell" => "powershell",
        "pug" | "jade" => "pug",
        "py" | "py3" | "python" | "python3" => "python",
        "r" => "r",
        "razor" | "cshtml" => "razor",
        "ruby" | "rb" | "rbx" => "ruby",
        "rust" => "rust",
        "scss" => "scss",
        "shaderlab" => "shaderlab",
        "shellscript" | "shell-script" | "bash" | "sh" | "zsh" => "shellscript",
        "slim" => "slim",
        "sql" | "pgsql" | "sqlpl" | "mysql" | "tsql" => "sql",
        "stylus" => "stylus",
        "swift" => "swift",
        "typescript" | "ts" | "tsx" => "typescript,typescriptreact",
        "tex" => "tex",
        "vb" => "vb",
        "vue" => "vue",
        "xml" | "xsd" | "rss" | "wsdl" => "xml",
        "xsl" | "xslt" => "xsl",
        "yaml" | "yml" => "yaml",
        _ => return None,
    };
    Some(scope)
}

/// Comma-joined editor scope for a code block's languages.
///
/// Order follows the declaration order and repeated identifiers are kept. An empty language
/// list yields `None`, meaning the snippet applies to every file.
#[must_use]
pub fn scope_for(langs: &[String]) -> Option<String> {
    let scope = langs
        .iter()
        .map(|lang| vscode_scope(lang).unwrap_or(lang.as_str()))
        .collect::<Vec<_>>()
        .join(",");
    (!scope.is_empty()).then_some(scope)
}

#[cfg(test)]
#[path = "tests/lang.rs"]
mod tests;
