use ringdeque::{RingDeque, Traversal};

fn describe<T: std::fmt::Display>(deque: &RingDeque<T>) {
    println!("{}", deque.len());
    println!("{}", deque.capacity());
    println!("{}", deque);
}

fn walk(deque: &RingDeque<&'static str>, mut traversal: Traversal<&'static str>) -> ringdeque::Result<()> {
    while traversal.has_next(deque)? {
        println!("{}", traversal.advance(deque)?);
    }
    Ok(())
}

fn main() -> ringdeque::Result<()> {
    let mut dq = RingDeque::with_capacity(2);
    let _ = dq.try_push_back("Hello World");
    dq.push_front("World Hello");
    dq.push_back("Hello World Hello");
    dq.push_front("World Hello World");
    dq.push_front("World Hello Hello World");
    dq.push_back("Hello World Hello World");
    describe(&dq);

    let mut dq = RingDeque::try_with_capacity(0)?;
    dq.push_front("Hello World");
    dq.push_front("World Hello");
    dq.push_front("World Hello World");
    dq.push_front("World Hello Hello World");
    // both rejected: a capacity of 4 is exactly full
    let _ = dq.try_push_back("World Hello Hello World World");
    let _ = dq.try_push_back("Hello Hello");
    describe(&dq);

    dq.push_back("World Hello Hello World World");
    dq.push_back("Hello Hello");
    describe(&dq);

    let mut dq = RingDeque::with_capacity(0);
    for item in [
        "Hello World",
        "World Hello",
        "World Hello World",
        "World Hello Hello World",
        "Hello World",
        "World Hello",
        "World World Hello",
        "World Hello Hello",
    ]
    .iter()
    {
        dq.push_back(*item);
    }
    let _ = dq.try_push_back("HehhEllo");
    let _ = dq.try_push_back("HehhEllo Olfle");
    dq.push_back("HehhEllo Olfle");
    describe(&dq);

    dq.clear();
    let _ = dq.try_push_back("1234");
    let _ = dq.try_push_back("4321");
    dq.push_front("4321123");
    let _ = dq.try_push_back("29349");
    dq.push_front("59494");

    let forward = dq.traverse();
    walk(&dq, forward)?;

    let backward = dq.traverse_back();
    dq.push_back("late arrival");
    if let Err(err) = walk(&dq, backward) {
        println!("{}", err);
    }

    Ok(())
}
