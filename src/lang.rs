//! Display colors for repository languages, as shown on github.com.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Used for unknown languages and repositories without one.
    pub const NEUTRAL: Rgb = Rgb(0xcc, 0xcc, 0xcc);

    fn from_hex(hex: u32) -> Self {
        Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Nearest entry of the xterm 256-color palette.
    pub fn to_ansi256(self) -> u8 {
        let Rgb(r, g, b) = self;

        if r == g && g == b {
            return match r {
                0..=7 => 16,
                249..=255 => 231,
                _ => 232 + ((r as u16 - 8) * 24 / 247) as u8,
            };
        }

        let cube = |c: u8| (c as u16 * 5 + 127) / 255;
        (16 + 36 * cube(r) + 6 * cube(g) + cube(b)) as u8
    }
}

const LANGUAGES: &[(&str, u32)] = &[
    ("1C Enterprise", 0x814ccc),
    ("ABAP", 0xe8274b),
    ("ABAP CDS", 0x555e25),
    ("ActionScript", 0x882b0f),
    ("Ada", 0x02f88c),
    ("Agda", 0x315665),
    ("AL", 0x3aa2b5),
    ("AMPL", 0xe6efbb),
    ("AngelScript", 0xc7d7dc),
    ("ANTLR", 0x9dc3ff),
    ("Apex", 0x1797c0),
    ("API Blueprint", 0x2acca8),
    ("APL", 0x5a8164),
    ("AppleScript", 0x101f1f),
    ("Arduino", 0xbd79d1),
    ("ASP.NET", 0x9400ff),
    ("Assembly", 0x6e4c13),
    ("Astro", 0xff5a03),
    ("ATS", 0x1ac620),
    ("AutoHotkey", 0x6594b9),
    ("Awk", 0xc30e9b),
    ("Ballerina", 0xff5000),
    ("Batchfile", 0xc1f12e),
    ("Beef", 0xa52f4e),
    ("Bicep", 0x519aba),
    ("BitBake", 0x00bce4),
    ("BlitzBasic", 0x00ffae),
    ("Boo", 0xd4bec1),
    ("Brainfuck", 0x2f2530),
    ("C", 0x555555),
    ("C#", 0x178600),
    ("C++", 0xf34b7d),
    ("Cairo", 0xff4a48),
    ("Cap'n Proto", 0xc42727),
    ("Ceylon", 0xdfa535),
    ("Chapel", 0x8dc63f),
    ("Cirru", 0xccccff),
    ("Clarion", 0xdb901e),
    ("Classic ASP", 0x6a40fd),
    ("Clean", 0x3f85af),
    ("Clojure", 0xdb5855),
    ("CMake", 0xda3434),
    ("COBOL", 0x005ca5),
    ("CodeQL", 0x140f46),
    ("CoffeeScript", 0x244776),
    ("ColdFusion", 0xed2cd6),
    ("Common Lisp", 0x3fb68b),
    ("Coq", 0xd0b68c),
    ("Crystal", 0x000100),
    ("CSS", 0x563d7c),
    ("Cuda", 0x3a4e3a),
    ("Cython", 0xfedf5b),
    ("D", 0xba595e),
    ("Dafny", 0xffec25),
    ("Dart", 0x00b4ab),
    ("Dhall", 0xdfafff),
    ("DIGITAL Command Language", 0x33363c),
    ("DM", 0x447265),
    ("Dockerfile", 0x384d54),
    ("Eiffel", 0x4d6977),
    ("EJS", 0xa91e50),
    ("Elixir", 0x6e4a7e),
    ("Elm", 0x60b5cc),
    ("Elvish", 0x55bb55),
    ("Emacs Lisp", 0xc065db),
    ("Erlang", 0xb83998),
    ("F#", 0xb845fc),
    ("Fennel", 0xfff3d7),
    ("Fluent", 0xffcc33),
    ("Forth", 0x341708),
    ("Fortran", 0x4d41b1),
    ("FreeMarker", 0x0050b2),
    ("Futhark", 0x5f021f),
    ("GAML", 0xffc766),
    ("GAMS", 0xf49a22),
    ("GAP", 0x0000cc),
    ("GDScript", 0x355570),
    ("Genie", 0xfb855d),
    ("Gherkin", 0x5b2063),
    ("Gleam", 0xffaff3),
    ("GLSL", 0x5686a5),
    ("Go", 0x00add8),
    ("GraphQL", 0xe10098),
    ("Groovy", 0x4298b8),
    ("Hack", 0x878787),
    ("Handlebars", 0xf7931e),
    ("Harbour", 0x0e60e3),
    ("Haskell", 0x5e5086),
    ("Haxe", 0xdf7900),
    ("HCL", 0x844fba),
    ("HLSL", 0xaace60),
    ("HTML", 0xe34c26),
    ("Hy", 0x7790b2),
    ("IDL", 0xa3522f),
    ("Idris", 0xb30000),
    ("Inno Setup", 0x264b99),
    ("Io", 0xa9188d),
    ("Isabelle", 0xfefe00),
    ("J", 0x9eedff),
    ("Janet", 0x0886a5),
    ("Jasmin", 0xd03600),
    ("Java", 0xb07219),
    ("JavaScript", 0xf1e05a),
    ("Jinja", 0xa52a22),
    ("Jsonnet", 0x0064bd),
    ("Julia", 0xa270ba),
    ("Jupyter Notebook", 0xda5b0b),
    ("Just", 0x384d54),
    ("Kaitai Struct", 0x773b37),
    ("KiCad Layout", 0x2f4aab),
    ("Kotlin", 0xa97bff),
    ("Lasso", 0x999999),
    ("Lean", 0x000000),
    ("Less", 0x1d365d),
    ("LiveScript", 0x499886),
    ("LLVM", 0x185619),
    ("LOLCODE", 0xcc9900),
    ("LookML", 0x652b81),
    ("LSL", 0x3d9970),
    ("Lua", 0x000080),
    ("Luau", 0x00a2ff),
    ("M4", 0x000000),
    ("Makefile", 0x427819),
    ("Markdown", 0x083fa1),
    ("MATLAB", 0xe16737),
    ("Max", 0xc4a79c),
    ("Mercury", 0xff2b2b),
    ("Meson", 0x007800),
    ("Mojo", 0xff4c1f),
    ("MoonScript", 0xff4585),
    ("Motoko", 0xfbb03b),
    ("Move", 0x4a137a),
    ("Mustache", 0x724b3b),
    ("NASL", 0x333333),
    ("NCL", 0x28431f),
    ("Nextflow", 0x3ac486),
    ("Nim", 0xffc200),
    ("Nix", 0x7e7eff),
    ("NSIS", 0xcccccc),
    ("Nu", 0xc9df40),
    ("Nunjucks", 0x3d8137),
    ("Objective-C", 0x438eff),
    ("Objective-C++", 0x6866fb),
    ("OCaml", 0xef7a08),
    ("Odin", 0x60affe),
    ("Opal", 0xf7ede0),
    ("OpenSCAD", 0xe5cd45),
    ("Oz", 0xfab738),
    ("P4", 0x7055b5),
    ("Pascal", 0xe3f171),
    ("Pawn", 0xdbb284),
    ("Perl", 0x0298c3),
    ("PHP", 0x4f5d95),
    ("Pony", 0xcccccc),
    ("PostScript", 0xda291c),
    ("PowerShell", 0x012456),
    ("Processing", 0x0096d8),
    ("Prolog", 0x74283c),
    ("Pug", 0xa86454),
    ("Puppet", 0x302b6d),
    ("PureBasic", 0x5a6986),
    ("PureScript", 0x1d222d),
    ("Python", 0x3572a5),
    ("Q#", 0xfed659),
    ("QML", 0x44a51c),
    ("R", 0x198ce7),
    ("Racket", 0x3c5caa),
    ("Raku", 0x0000fb),
    ("Reason", 0xff5847),
    ("Rebol", 0x358a5b),
    ("Red", 0xf50000),
    ("Ren'Py", 0xff7f7f),
    ("ReScript", 0xed5051),
    ("Rich Text Format", 0xcccccc),
    ("Ring", 0x2d54cb),
    ("Roff", 0xecdebe),
    ("RouterOS Script", 0xde3941),
    ("Ruby", 0x701516),
    ("Rust", 0xdea584),
    ("SaltStack", 0x646464),
    ("SAS", 0xb34936),
    ("Sass", 0xa53b70),
    ("Scala", 0xc22d40),
    ("Scheme", 0x1e4aec),
    ("SCSS", 0xc6538c),
    ("Shell", 0x89e051),
    ("Slim", 0x2b2b2b),
    ("Smalltalk", 0x596706),
    ("Smarty", 0xf0c040),
    ("Solidity", 0xaa6746),
    ("SourcePawn", 0xf69e1d),
    ("SQL", 0xe38c00),
    ("Squirrel", 0x800000),
    ("Stan", 0xb2011d),
    ("Standard ML", 0xdc566d),
    ("Starlark", 0x76d275),
    ("Stylus", 0xff6347),
    ("SuperCollider", 0x46390b),
    ("Svelte", 0xff3e00),
    ("Swift", 0xf05138),
    ("SWIG", 0xcccccc),
    ("SystemVerilog", 0xdae1c2),
    ("Tcl", 0xe4cc98),
    ("Terra", 0x00004c),
    ("Terraform", 0x844fba),
    ("TeX", 0x3d6117),
    ("Thrift", 0xd12127),
    ("TLA", 0x4b0079),
    ("TSQL", 0xe38c00),
    ("Twig", 0xc1d026),
    ("TypeScript", 0x3178c6),
    ("Typst", 0x239dad),
    ("Uno", 0x9933cc),
    ("UnrealScript", 0xa54c4d),
    ("V", 0x4f87c4),
    ("Vala", 0xa56de2),
    ("Verilog", 0xb2b7f8),
    ("VHDL", 0xadb2cb),
    ("Vim Script", 0x199f4b),
    ("Vim Snippet", 0x199f4b),
    ("Visual Basic .NET", 0x945db7),
    ("Volt", 0x1f1f1f),
    ("Vue", 0x41b883),
    ("WebAssembly", 0x04133b),
    ("WGSL", 0x1a5e9a),
    ("Wren", 0x383838),
    ("X10", 0x4b6bef),
    ("xBase", 0x403a40),
    ("XC", 0x99da07),
    ("XQuery", 0x5232e7),
    ("XSLT", 0xeb8ceb),
    ("Yacc", 0x4b6c4b),
    ("YAML", 0xcb171e),
    ("YARA", 0x220000),
    ("Zeek", 0xcccccc),
    ("ZenScript", 0x00bcd1),
    ("Zephir", 0x118f9e),
    ("Zig", 0xec915c),
];

/// Look up the display color of `language`, ignoring ASCII case.
pub fn color(language: &str) -> Rgb {
    LANGUAGES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(language))
        .map(|&(_, hex)| Rgb::from_hex(hex))
        .unwrap_or(Rgb::NEUTRAL)
}
