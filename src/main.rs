pub mod catalog;
pub mod entity;
pub mod parser;
pub mod translator;

use std::io::{self, Read};
use structopt::StructOpt;

fn read() -> String {
    let mut content = String::new();
    let stdin = io::stdin();
    let mut handle = stdin.lock();
    handle.read_to_string(&mut content).unwrap();
    if !content.ends_with('\n') {
        content += "\n"
    }
    content
}

fn write(buf: &String) {
    println!("{}", buf);
}

fn section_line(section: &entity::Section) -> String {
    format!("{}\t{}\t{}", section.id, section.title, section.description)
}

#[derive(Debug, StructOpt)]
struct Opt {
    #[structopt(long = "debug")]
    pub debug: bool,
    /// List the bundled documentation sections and exit.
    #[structopt(long = "list")]
    pub list: bool,
    /// Render a bundled section instead of reading stdin.
    #[structopt(long = "section")]
    pub section: Option<String>,
    /// Print the bundled sections matching a term and exit.
    #[structopt(long = "search")]
    pub search: Option<String>,
}

fn main() {
    let opt = Opt::from_args();
    if opt.debug {
        println!(">>> opt = {:?}", &opt);
    }
    if opt.list {
        for section in catalog::sections() {
            println!("{}", section_line(section));
        }
        return;
    }
    if let Some(term) = &opt.search {
        for section in catalog::search(term) {
            println!("{}", section_line(section));
        }
        return;
    }
    let content = match &opt.section {
        Some(id) => match catalog::find(id) {
            Some(section) => section.content.to_string(),
            None => {
                eprintln!("No such section: {}", id);
                std::process::exit(1);
            }
        },
        None => read(),
    };
    let nodes = parser::render(content.as_str());
    if opt.debug {
        println!(">>> nodes = {:?}", &nodes);
    }
    let html = translator::translate(nodes);
    write(&html);
}
