use tag_query::{all_tags, Query, Tagged};

const FIRST_QUERY: &str = "#urgent";
const SECOND_QUERY: &str = "(#urgent OR #blocked) AND !#done";
const THIRD_QUERY: &str = "#work AND #urgent OR #home AND !#blocked";
const FOURTH_QUERY: &str = "((#home OR #garden) AND #weekend) OR #errand";

struct Todo {
    text: &'static str,
    tags: Vec<String>,
}

impl Todo {
    fn new(text: &'static str, tags: &[&str]) -> Self {
        Self {
            text,
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }
}

impl Tagged for Todo {
    fn tags(&self) -> &[String] {
        &self.tags
    }
}

fn main() {
    // The items extracted from the checklists
    let todos = [
        Todo::new("renew the passport", &["#admin", "#urgent"]),
        Todo::new("reply to the landlord", &["#home", "#blocked"]),
        Todo::new("book the flights", &["#urgent", "#done"]),
        Todo::new("water the plants", &["#garden", "#weekend"]),
        Todo::new("send the quarterly report", &["#work", "#urgent"]),
        Todo::new("buy groceries", &["#errand"]),
    ];
    println!("Tags: {}", all_tags(&todos).join(", "));

    // Parse and evaluate the queries
    for expression in [FIRST_QUERY, SECOND_QUERY, THIRD_QUERY, FOURTH_QUERY] {
        let query = Query::parse(expression).unwrap();
        println!(r#"Query: "{expression}" parsed as {query}"#);
        query.select(&todos).iter().for_each(|todo| {
            println!("  Found: {}", todo.text);
        });
    }
}
