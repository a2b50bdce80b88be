pub mod ast {
    macro_rules! or {
        ($left:expr, $right:expr) => {
            $crate::ast::Node::Or(Box::new($left), Box::new($right))
        };
    }

    macro_rules! and {
        ($left:expr, $right:expr) => {
            $crate::ast::Node::And(Box::new($left), Box::new($right))
        };
    }

    macro_rules! atom {
        ($value:expr) => {
            $crate::ast::Node::Atom(String::from($value))
        };
    }

    pub(crate) use and;
    pub(crate) use atom;
    pub(crate) use or;
}

pub mod items {
    use crate::tags::Tagged;

    #[derive(Debug, Clone, PartialEq, Eq)]
    pub struct Todo {
        pub text: String,
        pub tags: Vec<String>,
    }

    impl Todo {
        pub fn new(text: &str, tags: &[&str]) -> Self {
            Self {
                text: text.to_string(),
                tags: tags.iter().map(ToString::to_string).collect(),
            }
        }
    }

    impl Tagged for Todo {
        fn tags(&self) -> &[String] {
            &self.tags
        }
    }

    /// `X` tagged `a,b`, `Y` tagged `b,c` and `Z` tagged `c`.
    pub fn xyz() -> Vec<Todo> {
        vec![
            Todo::new("X", &["a", "b"]),
            Todo::new("Y", &["b", "c"]),
            Todo::new("Z", &["c"]),
        ]
    }

    pub fn texts<'a>(todos: impl IntoIterator<Item = &'a Todo>) -> Vec<&'a str> {
        let mut texts: Vec<&str> = todos.into_iter().map(|todo| todo.text.as_str()).collect();
        texts.sort_unstable();
        texts
    }
}
