use crate::Corpus;
use quickcheck::Arbitrary;

/// Five pages where `2.html` is the hub and `5.html` links nowhere.
pub fn corpus0() -> Corpus {
    Corpus::from_links([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
        ("5.html", vec![]),
    ])
    .unwrap()
}

/// `0 -> 1 -> ... -> n-1 -> 0`
pub fn cycle(n: usize) -> Corpus {
    assert!(n > 1, "{n}");
    Corpus::from_links((0..n).map(|i| (i.to_string(), vec![((i + 1) % n).to_string()]))).unwrap()
}

/// Every page links to every other page.
pub fn complete(n: usize) -> Corpus {
    assert!(n > 0, "{n}");
    Corpus::from_links((0..n).map(|i| {
        let links: Vec<_> = (0..n).filter(|j| *j != i).map(|j| j.to_string()).collect();
        (i.to_string(), links)
    }))
    .unwrap()
}

#[derive(Debug, Clone)]
pub struct RandomCorpus {
    pub corpus: Corpus,
}

impl Arbitrary for RandomCorpus {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        const N: usize = 10;

        let n: usize = usize::arbitrary(g) % N + 1;
        let mut links: Vec<(String, Vec<String>)> =
            (0..n).map(|i| (i.to_string(), vec![])).collect();
        for _ in 0..(n * 2) {
            let u = usize::arbitrary(g) % n;
            let v = usize::arbitrary(g) % n;
            links[u].1.push(v.to_string());
        }
        let corpus = Corpus::from_links(links).unwrap();
        Self { corpus }
    }
}
