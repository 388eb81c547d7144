use crate::entity::MarkupNode;

/// Translates a node sequence to HTML, one element per node, joined
/// with newlines.
pub fn translate(nodes: Vec<MarkupNode>) -> String {
    nodes
        .into_iter()
        .map(translate_node)
        .collect::<Vec<String>>()
        .join("\n")
}

fn translate_node(node: MarkupNode) -> String {
    match node {
        MarkupNode::Heading(level, text) => {
            format!("<h{}>{}</h{}>", level, escape(&text), level)
        }
        MarkupNode::CodeBlock(language, lines) => {
            let code = escape(&lines.join("\n"));
            if language.is_empty() {
                format!("<pre><code>{}</code></pre>", code)
            } else {
                format!(
                    "<pre><code class=\"language-{}\">{}</code></pre>",
                    escape(&language),
                    code
                )
            }
        }
        MarkupNode::Paragraph(text) => format!("<p>{}</p>", escape(&text)),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use crate::entity::MarkupNode::*;
    use crate::translator::*;

    #[test]
    fn test_escape() {
        assert_eq!(escape("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape("plain"), "plain");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_translate_headings() {
        assert_eq!(
            translate(vec![Heading(1, String::from("Title"))]),
            "<h1>Title</h1>"
        );
        assert_eq!(
            translate(vec![Heading(2, String::from("Sub"))]),
            "<h2>Sub</h2>"
        );
    }

    #[test]
    fn test_translate_code_block() {
        assert_eq!(
            translate(vec![CodeBlock(
                String::from("python"),
                vec![String::from("import bpy"), String::from("print(1)")]
            )]),
            "<pre><code class=\"language-python\">import bpy\nprint(1)</code></pre>"
        );
        // No language tag, no class attribute.
        assert_eq!(
            translate(vec![CodeBlock(String::from(""), vec![String::from("x")])]),
            "<pre><code>x</code></pre>"
        );
    }

    #[test]
    fn test_translate_escapes_code() {
        assert_eq!(
            translate(vec![CodeBlock(
                String::from("html"),
                vec![String::from("<b>&</b>")]
            )]),
            "<pre><code class=\"language-html\">&lt;b&gt;&amp;&lt;/b&gt;</code></pre>"
        );
    }

    #[test]
    fn test_translate_document() {
        let nodes = vec![
            Heading(1, String::from("Guide")),
            Paragraph(String::from("Intro.")),
            CodeBlock(String::from("bash"), vec![String::from("ls")]),
        ];
        assert_eq!(
            translate(nodes),
            "<h1>Guide</h1>\n<p>Intro.</p>\n<pre><code class=\"language-bash\">ls</code></pre>"
        );
    }

    #[test]
    fn test_translate_empty() {
        assert_eq!(translate(vec![]), "");
    }
}
