//! Counter and name components wired to one store, rendered to the terminal

use slicestore::{field, Dispatcher, Registration, Store, StoreOptions};

#[derive(Clone, Debug)]
struct State {
    count: i32,
    name: String,
}

struct Counter {
    increment: Dispatcher<()>,
    decrement: Dispatcher<()>,
}

impl Counter {
    fn new(store: &Store<State>) -> slicestore::Result<Self> {
        let decrement = store.register(Registration::new(
            field!(State, count),
            "[Counter]: decrease count",
            |c: &i32, ()| c - 1,
        ))?;
        let increment = store.register(Registration::new(
            field!(State, count),
            "[Counter]: increase count",
            |c: &i32, ()| c + 1,
        ))?;
        Ok(Self {
            increment,
            decrement,
        })
    }

    fn render(count: i32) -> String {
        if count != 0 {
            format!("Count: {count}")
        } else {
            "No count".to_string()
        }
    }
}

struct Name {
    change: Dispatcher<String>,
}

impl Name {
    fn new(store: &Store<State>) -> slicestore::Result<Self> {
        let change = store
            .slice(field!(State, name))
            .case("[Name]: change name")
            .reduce(|_: &String, name: String| name)?;
        Ok(Self { change })
    }

    fn render(name: &str) -> String {
        if name.is_empty() {
            "You currently have no name. Start typing below".to_string()
        } else {
            format!("Your name is: {name}")
        }
    }
}

fn render(state: &State) {
    println!("--- Hello world! ---");
    println!("{}", Counter::render(state.count));
    println!("{}", Name::render(&state.name));
}

fn main() -> slicestore::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let store = Store::with_options(
        State {
            count: 0,
            name: String::new(),
        },
        StoreOptions {
            enable_log: true,
            ..StoreOptions::default()
        },
    );
    let counter = Counter::new(&store)?;
    let name = Name::new(&store)?;

    let _subscription = store.subscribe(|state| render(state));

    counter.increment.trigger();
    counter.increment.trigger();
    counter.decrement.trigger();
    for typed in ["A", "Al", "Alice"] {
        name.change.dispatch(typed.to_string());
    }

    if let Err(err) = Counter::new(&store) {
        println!("registering the counter twice fails: {err}");
    }
    Ok(())
}
