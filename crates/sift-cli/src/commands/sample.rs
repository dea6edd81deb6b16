//! Sample command - write demo datasets and reference files.

use std::fs;
use std::path::{Path, PathBuf};

use colored::Colorize;

const PHONE_CSV: &str = "\
ph_nb
+91 6796233790
+1 2312953582
+44 2028323322
4853859590
+1 475-216-2114
(080) 1234 5678
+91 9876543210
";

const COMPANY_CSV: &str = "\
CompanyName
Tresata pvt ltd.
Enno Roggemann GmbH & Co. KG
First National Bank
Debrunner Acifer AG
Microsoft Corporation
Apple Inc.
Google LLC
";

const DATES_CSV: &str = "\
Date
2024-01-15
12/25/2023
15-03-2024
\"January 1, 2024\"
2024/06/30
03-15-2024
";

const COUNTRIES_TXT: &str = "\
India
United States
United Kingdom
Canada
Australia
Germany
France
China
Japan
Brazil
Mexico
Italy
Spain
Russia
South Korea
";

const LEGAL_TXT: &str = "\
ltd
limited
inc
incorporated
corp
corporation
llc
gmbh
ag
pvt
private
co
kg
plc
sa
nv
bv
";

pub fn run(dir: PathBuf, verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let data_dir = dir.join("data");
    fs::create_dir_all(&data_dir)?;

    let files: &[(PathBuf, &str)] = &[
        (data_dir.join("phoneNumber.csv"), PHONE_CSV),
        (data_dir.join("Company.csv"), COMPANY_CSV),
        (data_dir.join("Dates.csv"), DATES_CSV),
        (dir.join("Countries.txt"), COUNTRIES_TXT),
        (dir.join("legal.txt"), LEGAL_TXT),
    ];

    for (path, contents) in files {
        write_file(path, contents)?;
        if verbose {
            println!("  wrote {}", path.display());
        }
    }

    println!(
        "{} demo files under {}",
        "Created".green().bold(),
        dir.display().to_string().white()
    );
    println!(
        "Try {}",
        format!("sift parse {}", data_dir.join("phoneNumber.csv").display())
            .cyan()
            .bold()
    );

    Ok(())
}

fn write_file(path: &Path, contents: &str) -> std::io::Result<()> {
    fs::write(path, contents)
}
