const HELP: &str = "\
Commands:
  connect                              connect the wallet
  disconnect                           disconnect the wallet
  refresh                              reload balance and transactions
  sort <date|amount>                   order the transaction list
  filter <all|transfer|swap|other>     show one transaction type
  help                                 show this message
  quit                                 close the popup";

pub fn execute() {
    println!("{}", HELP);
}
