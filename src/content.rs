use serde::Serialize;

/// Static marketing content. Plans and quoted returns are copy only, the
/// backend never computes them.
#[derive(Debug, Serialize, Clone, Copy)]
pub struct Page {
    pub slug: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub const PAGES: [Page; 4] = [
    Page {
        slug: "services",
        title: "Our Services",
        body: "Coinfolio offers managed crypto portfolios across ten major \
               assets. Fund your account in the asset of your choice, track \
               balances from a single dashboard and withdraw at any time. \
               Our support desk is available around the clock.",
    },
    Page {
        slug: "plans",
        title: "Investment Plans",
        body: "Starter: from 100 USDT, weekly statements. Growth: from \
               1,000 USDT, priority support and a dedicated account manager. \
               Premier: from 10,000 USDT, bespoke allocation reviews. Quoted \
               returns are illustrative and not a promise of performance.",
    },
    Page {
        slug: "privacy-policy",
        title: "Privacy Policy",
        body: "We collect the information you provide when you create an \
               account: your name, email address and phone number. We use it \
               to operate your dashboard and to contact you about your \
               account. We do not sell personal data to third parties. You \
               may request deletion of your account data at any time by \
               contacting support.",
    },
    Page {
        slug: "terms",
        title: "Terms of Service",
        body: "By using Coinfolio you confirm that you are of legal age in \
               your jurisdiction and that digital asset investments carry \
               risk, including loss of principal. Deposits are reviewed \
               before they are credited. We may suspend accounts engaged in \
               fraudulent activity. These terms are governed by the laws of \
               the operator's place of incorporation.",
    },
];

pub fn page(slug: &str) -> Option<&'static Page> {
    PAGES.iter().find(|page| page.slug == slug)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_page_lookup() {
        assert_eq!(page("terms").unwrap().title, "Terms of Service");
        assert_eq!(page("privacy-policy").unwrap().slug, "privacy-policy");
        assert!(page("careers").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        let mut slugs: Vec<&str> = PAGES.iter().map(|page| page.slug).collect();
        slugs.sort();
        slugs.dedup();
        assert_eq!(slugs.len(), PAGES.len());
    }
}
