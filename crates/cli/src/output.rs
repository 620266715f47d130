use ferrous_lookup_domain::{ResourceRecord, Response};

pub fn print_response(response: &Response) {
    let header = &response.header;
    println!(
        "Header: id={} status={} flags={:#06x} qd={} an={} ns={} ar={}",
        header.id,
        header.response_code(),
        header.flags,
        header.question_count,
        header.answer_count,
        header.authority_count,
        header.additional_count,
    );
    println!();

    println!("Question Section:");
    for question in &response.questions {
        println!("  - {}", question);
    }
    println!();

    print_section("Answer Section", &response.answers);
    print_section("Authority Section", &response.authorities);
    print_section("Additional Section", &response.additionals);
}

fn print_section(title: &str, records: &[ResourceRecord]) {
    if records.is_empty() {
        println!("{}: No records found.", title);
    } else {
        println!("{}:", title);
        for record in records {
            println!("  - {}", record);
        }
    }
    println!();
}

pub fn print_names(title: &str, names: &[String]) {
    if names.is_empty() {
        println!("{}: No records found.", title);
        return;
    }
    println!("{}:", title);
    for name in names {
        println!("  - {}", name);
    }
}
