#[cfg(test)]
#[path = "registry_test.rs"]
mod tests;

use strum::IntoEnumIterator;

use crate::domain::models::Language;
use crate::domain::models::LanguageProfile;
use crate::domain::models::SnippetTemplate;

/// Process-wide language catalog. Built once, never mutated. The set of
/// valid languages is closed by the `Language` enum, so lookups are total.
pub struct LanguageRegistry {}

impl LanguageRegistry {
    pub fn get(language: Language) -> &'static LanguageProfile {
        return PROFILES
            .iter()
            .find(|profile| return profile.language == language)
            .expect("every supported language has a profile");
    }

    pub fn all() -> Vec<Language> {
        return Language::iter().collect();
    }
}

static PROFILES: [LanguageProfile; 10] = [
    LanguageProfile {
        language: Language::JavaScript,
        sample: "function greet(name) {\n  return `Hello, ${name}!`;\n}\n\nconsole.log(greet(\"world\"));\n",
        snippets: &[
            SnippetTemplate {
                trigger: "function",
                body: "function ${1:name}(${2:args}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "for",
                body: "for (let ${1:i} = 0; ${1:i} < ${2:count}; ${1:i}++) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if (${1:condition}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "class",
                body: "class ${1:ClassName} {\n\tconstructor(${2:args}) {\n\t\t${0}\n\t}\n}",
            },
        ],
    },
    LanguageProfile {
        language: Language::Java,
        sample: "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, world!\");\n    }\n}\n",
        snippets: &[
            SnippetTemplate {
                trigger: "main",
                body: "public static void main(String[] ${1:args}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "for",
                body: "for (int ${1:i} = 0; ${1:i} < ${2:count}; ${1:i}++) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if (${1:condition}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "class",
                body: "public class ${1:ClassName} {\n\tpublic ${1:ClassName}(${2:args}) {\n\t\t${0}\n\t}\n}",
            },
        ],
    },
    LanguageProfile {
        language: Language::Cpp,
        sample: "#include <iostream>\n\nint main() {\n    std::cout << \"Hello, world!\" << std::endl;\n    return 0;\n}\n",
        snippets: &[
            SnippetTemplate {
                trigger: "for",
                body: "for (int ${1:i} = 0; ${1:i} < ${2:count}; ${1:i}++) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if (${1:condition}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "while",
                body: "while (${1:condition}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "class",
                body: "class ${1:ClassName} {\npublic:\n\t${1:ClassName}(${2:args}) {\n\t\t${0}\n\t}\n};",
            },
        ],
    },
    LanguageProfile {
        language: Language::C,
        sample: "#include <stdio.h>\n\nint main(void) {\n    printf(\"Hello, world!\\n\");\n    return 0;\n}\n",
        snippets: &[
            SnippetTemplate {
                trigger: "for",
                body: "for (${1:int i = 0}; ${1:i} < ${2:count}; ${1:i}++) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if (${1:condition}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "while",
                body: "while (${1:condition}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "printf",
                body: "printf(\"${1:format}\", ${2:variables});",
            },
        ],
    },
    LanguageProfile {
        language: Language::Python,
        sample: "def greet(name):\n    return f\"Hello, {name}!\"\n\n\nprint(greet(\"world\"))\n",
        snippets: &[
            SnippetTemplate {
                trigger: "for",
                body: "for ${1:variable} in ${2:iterable}:\n\t${0:pass}",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if ${1:condition}:\n\t${0:pass}",
            },
            SnippetTemplate {
                trigger: "class",
                body: "class ${1:ClassName}:\n\tdef __init__(self, ${2:args}):\n\t\t${0:pass}",
            },
            SnippetTemplate {
                trigger: "def",
                body: "def ${1:func_name}(${2:args}):\n\t${0:pass}",
            },
        ],
    },
    LanguageProfile {
        language: Language::CSharp,
        sample: "using System;\n\nclass Program {\n    static void Main() {\n        Console.WriteLine(\"Hello, world!\");\n    }\n}\n",
        snippets: &[
            SnippetTemplate {
                trigger: "for",
                body: "for (int ${1:i} = 0; ${1:i} < ${2:count}; ${1:i}++) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if (${1:condition}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "foreach",
                body: "foreach (var ${1:item} in ${2:collection}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "class",
                body: "class ${1:ClassName} {\n\t${1:ClassName}(${2:args}) {\n\t\t${0}\n\t}\n}",
            },
        ],
    },
    LanguageProfile {
        language: Language::Ruby,
        sample: "def greet(name)\n  \"Hello, #{name}!\"\nend\n\nputs greet(\"world\")\n",
        snippets: &[
            SnippetTemplate {
                trigger: "def",
                body: "def ${1:method_name}\n\t${0}\nend",
            },
            SnippetTemplate {
                trigger: "class",
                body: "class ${1:ClassName}\n\tdef initialize(${2:args})\n\t\t${0}\n\tend\nend",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if ${1:condition}\n\t${0}\nend",
            },
            SnippetTemplate {
                trigger: "for",
                body: "for ${1:variable} in ${2:iterable}\n\t${0}\nend",
            },
        ],
    },
    LanguageProfile {
        language: Language::TypeScript,
        sample: "function greet(name: string): string {\n  return `Hello, ${name}!`;\n}\n\nconsole.log(greet(\"world\"));\n",
        snippets: &[
            SnippetTemplate {
                trigger: "function",
                body: "function ${1:name}(${2:args}): ${3:ReturnType} {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "for",
                body: "for (let ${1:i} = 0; ${1:i} < ${2:count}; ${1:i}++) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if (${1:condition}) {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "interface",
                body: "interface ${1:Name} {\n\t${0}\n}",
            },
        ],
    },
    LanguageProfile {
        language: Language::Rust,
        sample: "fn greet(name: &str) -> String {\n    format!(\"Hello, {name}!\")\n}\n\nfn main() {\n    println!(\"{}\", greet(\"world\"));\n}\n",
        snippets: &[
            SnippetTemplate {
                trigger: "fn",
                body: "fn ${1:function_name}(${2:args}) -> ${3:return_type} {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "for",
                body: "for ${1:item} in ${2:collection} {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if ${1:condition} {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "struct",
                body: "struct ${1:StructName} {\n\t${0}\n}",
            },
        ],
    },
    LanguageProfile {
        language: Language::Swift,
        sample: "func greet(_ name: String) -> String {\n    return \"Hello, \\(name)!\"\n}\n\nprint(greet(\"world\"))\n",
        snippets: &[
            SnippetTemplate {
                trigger: "for",
                body: "for ${1:element} in ${2:collection} {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "if",
                body: "if ${1:condition} {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "while",
                body: "while ${1:condition} {\n\t${0}\n}",
            },
            SnippetTemplate {
                trigger: "func",
                body: "func ${1:functionName}(${2:parameters}) -> ${3:returnType} {\n\t${0}\n}",
            },
        ],
    },
];
