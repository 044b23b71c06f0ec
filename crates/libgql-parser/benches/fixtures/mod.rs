//! Synthetic documents for the parser benchmarks.

use std::fmt::Write;

pub const STARWARS_SCHEMA: &str = r#"
schema {
  query: Query
  mutation: Mutation
}

"One of the films in the Star Wars Trilogy"
enum Episode { NEWHOPE EMPIRE JEDI }

"A character in the Star Wars Trilogy"
interface Character {
  id: ID!
  name: String
  friends: [Character]
  appearsIn: [Episode]
}

type Human implements Character {
  id: ID!
  name: String
  friends: [Character]
  appearsIn: [Episode]
  homePlanet: String
}

type Droid implements Character {
  id: ID!
  name: String
  friends: [Character]
  appearsIn: [Episode]
  primaryFunction: String
}

input ReviewInput {
  stars: Int!
  commentary: String = "none"
}

type Review { stars: Int! commentary: String }

type Query {
  hero(episode: Episode): Character
  human(id: ID!): Human
  droid(id: ID!): Droid
}

type Mutation {
  createReview(episode: Episode, review: ReviewInput!): Review
}
"#;

pub const COMPLEX_QUERY: &str = r#"
query HeroAndFriends($episode: Episode = JEDI, $withFriends: Boolean!) {
  hero(episode: $episode) {
    ...CharacterFields
    friends @include(if: $withFriends) {
      ...CharacterFields
      ... on Droid { primaryFunction }
      ... on Human { homePlanet }
    }
  }
}

fragment CharacterFields on Character {
  __typename
  id
  name
  appearsIn
}
"#;

/// Generates a schema with `type_count` object types, each with
/// `field_count` fields, some of them taking arguments.
pub fn synthetic_schema(type_count: usize, field_count: usize) -> String {
    let mut out = String::new();
    for t in 0..type_count {
        let _ = writeln!(out, "\"\"\"\nType number {t}.\n\"\"\"");
        let _ = writeln!(out, "type Type{t} implements Node {{");
        let _ = writeln!(out, "  id: ID!");
        for f in 0..field_count {
            if f % 3 == 0 {
                let _ = writeln!(
                    out,
                    "  field{f}(first: Int = 10, after: String): [Type{t}!]! @deprecated",
                );
            } else {
                let _ = writeln!(out, "  field{f}: String");
            }
        }
        let _ = writeln!(out, "}}\n");
    }
    out.push_str("interface Node { id: ID! }\n");
    out
}

/// Generates a query nested `depth` selection sets deep.
pub fn deeply_nested_query(depth: usize) -> String {
    let mut out = String::from("query Deep ");
    for level in 0..depth {
        let _ = write!(out, "{{ level{level}(arg: {level}) ");
    }
    out.push_str("{ leaf }");
    for _ in 0..depth {
        out.push_str(" }");
    }
    out
}
