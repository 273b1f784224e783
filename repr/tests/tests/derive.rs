use debuggable_tests::renders;

mod shop {
    use debuggable::{Debuggable, Repr};

    #[derive(Debuggable)]
    pub struct Order {
        pub id: u32,
        pub items: Vec<&'static str>,
        pub gift: Option<String>,
    }

    #[derive(Debuggable)]
    pub struct Sku(pub u16, pub &'static str);

    #[derive(Debuggable)]
    pub struct Closed;

    #[derive(Debuggable)]
    pub enum Status {
        Open,
        Shipped { tracking: String },
        Refunded(i32),
    }

    #[derive(Debuggable)]
    pub struct Pair<A, B> {
        pub left: A,
        pub right: B,
    }

    #[derive(Debuggable)]
    pub struct Account {
        pub name: String,
        #[debuggable(skip)]
        pub password: String,
        #[debuggable(with = "crate::shop::masked")]
        pub card: String,
    }

    pub fn masked(card: &String) -> Repr {
        let tail = card.len().saturating_sub(4);
        Repr::from(format!("****{}", &card[tail..]))
    }

    #[derive(Debuggable)]
    #[debuggable(namespace = "billing::v2")]
    pub struct Invoice(pub u64);

    #[derive(Debuggable)]
    pub struct Token {
        pub r#type: char,
    }

    #[derive(Debuggable)]
    pub struct Masked(#[debuggable(skip)] pub u8, pub bool);

    #[derive(Debuggable)]
    pub enum Tree {
        Leaf,
        Node(Box<Tree>, i32, Box<Tree>),
    }

    impl Tree {
        pub fn node(left: Tree, value: i32, right: Tree) -> Tree {
            Tree::Node(Box::new(left), value, Box::new(right))
        }
    }

    #[derive(Debuggable)]
    pub struct Schema {
        pub namespace: String,
        pub fields: Vec<u8>,
    }

    #[derive(Debuggable)]
    pub enum Column {
        Typed { namespace: &'static str, fields: (u8, u8) },
    }

    #[derive(Debuggable)]
    pub enum Never {}

    #[derive(Debuggable)]
    pub struct Empty {}
}

use shop::*;

renders!(
    named_struct,
    Order { id: 7, items: vec!["tea"], gift: None },
    r#"Order(id = 7u32, items = Vec("tea"), gift = None)"#,
    "Order(7, Vec(tea), None)",
    "derive::shop::Order(id -> 7, items -> std::vec::Vec(tea), gift -> std::option::None)",
);

renders!(
    tuple_struct,
    Sku(12, "mug"),
    r#"Sku(12u16, "mug")"#,
    "Sku(12, mug)",
    "derive::shop::Sku(12, mug)",
);

renders!(unit_struct, Closed, "Closed", "Closed", "derive::shop::Closed");

renders!(empty_braced_struct, Empty {}, "Empty()", "Empty()", "derive::shop::Empty()");

renders!(unit_variant, Status::Open, "Open", "Open", "derive::shop::Status::Open");

renders!(
    named_variant,
    Status::Shipped { tracking: "1Z".to_string() },
    r#"Shipped(tracking = "1Z")"#,
    "Shipped(1Z)",
    "derive::shop::Status::Shipped(tracking -> 1Z)",
);

renders!(
    tuple_variant,
    Status::Refunded(-5),
    "Refunded(-5)",
    "Refunded(-5)",
    "derive::shop::Status::Refunded(-5)",
);

renders!(
    generic_struct,
    Pair { left: 'x', right: (1i32, true) },
    "Pair(left = 'x', right = (1, true))",
    "Pair(x, (1, true))",
    "derive::shop::Pair(left -> x, right -> Tuple2(1, true))",
);

renders!(
    skipped_and_custom_fields,
    Account {
        name: "ada".to_string(),
        password: "hunter2".to_string(),
        card: "4111111111111111".to_string(),
    },
    r#"Account(name = "ada", card = "****1111")"#,
    "Account(ada, ****1111)",
    "derive::shop::Account(name -> ada, card -> ****1111)",
);

renders!(
    namespace_attribute,
    Invoice(42),
    "Invoice(42u64)",
    "Invoice(42)",
    "billing::v2::Invoice(42)",
);

renders!(
    raw_identifiers,
    Token { r#type: 'k' },
    "Token(type = 'k')",
    "Token(k)",
    "derive::shop::Token(type -> k)",
);

renders!(
    skipped_positional_field,
    Masked(9, true),
    "Masked(true)",
    "Masked(true)",
    "derive::shop::Masked(true)",
);

renders!(
    recursive_enum,
    Tree::node(Tree::Leaf, 1, Tree::node(Tree::Leaf, 2, Tree::Leaf)),
    "Node(Leaf, 1, Node(Leaf, 2, Leaf))",
    "Node(Leaf, 1, Node(Leaf, 2, Leaf))",
    "derive::shop::Tree::Node(derive::shop::Tree::Leaf, 1, derive::shop::Tree::Node(\
     derive::shop::Tree::Leaf, 2, derive::shop::Tree::Leaf))",
);

renders!(
    fields_named_like_generated_locals,
    Schema { namespace: "public".to_string(), fields: vec![1, 2] },
    r#"Schema(namespace = "public", fields = Vec(1u8, 2u8))"#,
    "Schema(public, Vec(1, 2))",
    "derive::shop::Schema(namespace -> public, fields -> std::vec::Vec(1, 2))",
);

renders!(
    variant_fields_named_like_generated_locals,
    Column::Typed { namespace: "ns", fields: (0, 1) },
    r#"Typed(namespace = "ns", fields = (0u8, 1u8))"#,
    "Typed(ns, (0, 1))",
    "derive::shop::Column::Typed(namespace -> ns, fields -> Tuple2(0, 1))",
);

#[test]
fn uninhabited_enum_still_implements_the_trait() {
    fn assert_debuggable<T: debuggable::Debuggable>() {}
    assert_debuggable::<Never>();
    assert_debuggable::<Option<Never>>();
}

#[test]
fn derived_values_compose_with_containers() {
    use debuggable::prelude::*;
    let orders = vec![Sku(1, "a"), Sku(2, "b")];
    assert_eq!(orders.show(), r#"Vec(Sku(1u16, "a"), Sku(2u16, "b"))"#);
    assert_eq!(Some(Closed).show_with(Renderer::Full), "std::option::Some(derive::shop::Closed)");
}
