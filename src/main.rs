
use std::env;
use std::sync::Arc;

use chrono::NaiveDate;

use festivos::holiday::colombia::colombia;
use festivos::holiday::queryservice::HolidayQueryService;
use festivos::holiday::rulestore::{
    InMemoryRuleStore,
    RuleStore
};

const RULES_ENV: &'static str = "FESTIVOS_RULES";

fn main() {

    let store: Arc<dyn RuleStore> = match env::var(RULES_ENV) {
        Ok(rules_path) => Arc::new(InMemoryRuleStore::from_reader(rules_path).unwrap()),
        Err(_) => Arc::new(InMemoryRuleStore::new(colombia()))
    };
    let service = HolidayQueryService::new(store);

    let args: Vec<String> = env::args().skip(1).collect();
    match args.len() {
        1 => {
            let year = args[0].parse::<i32>().unwrap();
            for holiday in service.list_year(year).unwrap() {
                println!("{}, {}", holiday.date(), holiday.name());
            }
        },
        3 => {
            let year = args[0].parse::<i32>().unwrap();
            let month = args[1].parse::<u32>().unwrap();
            let day = args[2].parse::<u32>().unwrap();
            let date = NaiveDate::from_ymd_opt(year, month, day);
            match service.is_holiday(date) {
                Ok(result) => match result.name() {
                    Some(name) => println!("{:04}-{:02}-{:02} is a holiday: {}", year, month, day, name),
                    None => println!("{:04}-{:02}-{:02} is not a holiday", year, month, day)
                },
                Err(error) => println!("{}", error)
            }
        },
        _ => println!("usage: festivos <year> | festivos <year> <month> <day>")
    }
}
