use std::fmt::{Display, Formatter, Result, Write};

use crate::node::Node;

/// Renders the node graph of a tree in the Graphviz DOT language.
#[derive(Debug)]
pub(crate) struct Dot<'a, T>(pub(crate) Option<&'a Node<T>>);

impl<T> Display for Dot<'_, T>
where
    T: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "digraph {{")?;
        writeln!(
            f,
            r#"node [shape = record; style = filled; fontcolor = orange4; fillcolor = white;];"#
        )?;
        if let Some(n) = self.0 {
            recurse(n, f)?;
        }
        writeln!(f, "}}")
    }
}

fn recurse<T, W>(n: &Node<T>, buf: &mut W) -> Result
where
    W: Write,
    T: Display,
{
    writeln!(
        buf,
        r#""{}" [label="{} | h={}"];"#,
        n.value(),
        n.value(),
        n.height(),
    )?;

    for v in [n.left(), n.right()] {
        match v {
            Some(v) => {
                writeln!(
                    buf,
                    "\"{}\" -> \"{}\" [color = \"orange1\";];",
                    n.value(),
                    v.value()
                )?;
                recurse(v, buf)?;
            }
            None => {
                writeln!(buf, "\"null_{}\" [shape=point,style=invis];", n.value())?;
                writeln!(buf, "\"{}\" -> \"null_{}\" [style=invis];", n.value(), n.value())?;
            }
        };
    }

    Ok(())
}
