//! Fixed catalog used to repopulate the store on reset

use crate::models::Book;

struct SeedBook {
    title: &'static str,
    author: &'static str,
    genre: &'static str,
    description: &'static str,
    isbn: &'static str,
    image: &'static str,
    published: &'static str,
    publisher: &'static str,
}

const SEED_BOOKS: [SeedBook; 7] = [
    SeedBook {
        title: "The Go Programming Language",
        author: "Alan A. A. Donovan",
        genre: "Programming",
        description: "An introduction to Go.",
        isbn: "978-0134190440",
        image: "http://example.com/go-book.jpg",
        published: "2015",
        publisher: "Addison-Wesley",
    },
    SeedBook {
        title: "Clean Code",
        author: "Robert C. Martin",
        genre: "Programming",
        description: "A Handbook of Agile Software Craftsmanship.",
        isbn: "978-0132350884",
        image: "http://example.com/clean-code.jpg",
        published: "2008",
        publisher: "Prentice Hall",
    },
    SeedBook {
        title: "The Pragmatic Programmer",
        author: "Andrew Hunt, David Thomas",
        genre: "Programming",
        description: "Your Journey to Mastery.",
        isbn: "978-0135957059",
        image: "http://example.com/pragmatic-programmer.jpg",
        published: "1999",
        publisher: "Addison-Wesley",
    },
    SeedBook {
        title: "The Clean Coder",
        author: "Robert C. Martin",
        genre: "Programming",
        description: "A Code of Conduct for Professional Programmers.",
        isbn: "978-0136083238",
        image: "http://example.com/clean-coder.jpg",
        published: "2011",
        publisher: "Prentice Hall",
    },
    SeedBook {
        title: "Refactoring: Improving the Design of Existing Code",
        author: "Martin Fowler",
        genre: "Programming",
        description: "A detailed guide on how to refactor code.",
        isbn: "978-0201485677",
        image: "http://example.com/refactoring.jpg",
        published: "1999",
        publisher: "Addison-Wesley",
    },
    SeedBook {
        title: "Code Complete",
        author: "Steve McConnell",
        genre: "Software Development",
        description: "A practical guide to software construction.",
        isbn: "978-0735619678",
        image: "http://example.com/code-complete.jpg",
        published: "2004",
        publisher: "Microsoft Press",
    },
    SeedBook {
        title: "You Don't Know JS",
        author: "Kyle Simpson",
        genre: "Programming",
        description: "An in-depth look at JavaScript.",
        isbn: "978-1491903995",
        image: "http://example.com/you-dont-know-js.jpg",
        published: "2015",
        publisher: "O'Reilly Media",
    },
];

impl From<&SeedBook> for Book {
    fn from(seed: &SeedBook) -> Self {
        Book {
            id: 0,
            title: seed.title.to_string(),
            author: seed.author.to_string(),
            genre: seed.genre.to_string(),
            description: seed.description.to_string(),
            isbn: seed.isbn.to_string(),
            image: seed.image.to_string(),
            published: seed.published.to_string(),
            publisher: seed.publisher.to_string(),
        }
    }
}

/// Seed books in order, without identifiers
pub fn seed_books() -> Vec<Book> {
    SEED_BOOKS.iter().map(Book::from).collect()
}
