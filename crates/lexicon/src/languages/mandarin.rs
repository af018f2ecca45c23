use canonical::{Script, Segment, TransliterationTable};
use fxhash::FxHashMap;

use crate::language::Language;
use crate::rules::{LanguageRules, NameOrder, RuleTables, TableKind};
use crate::sets::HonorificSet;

use super::LanguageSpec;

/// Romanized surnames ordered by frequency, pinyin first and then the
/// Cantonese and Wade-Giles spellings.
const ROMANIZED_SURNAMES: &[&str] = &[
    "wang", "li", "zhang", "liu", "chen", "yang", "huang", "zhao", "zhou", "wu", "xu", "sun",
    "zhu", "ma", "hu", "guo", "lin", "he", "gao", "liang", "zheng", "luo", "song", "xie",
    "tang", "han", "cao", "deng", "xiao", "feng", "zeng", "cheng", "cai", "peng", "pan", "yuan",
    "yu", "dong", "su", "ye", "lv", "wei", "jiang", "tian", "du", "ding", "shen", "fan", "fu",
    "zhong", "lu", "dai", "cui", "ren", "liao", "yao", "fang", "jin", "qiu", "xia", "tan",
    "jia", "zou", "shi", "xiong", "meng", "qin", "yan", "xue", "hou", "lei", "bai", "long",
    "duan", "hao", "kong", "shao", "mao", "chang", "wan", "gu", "lai", "kang", "yin", "qian",
    "niu", "hong", "gong", "ouyang", "sima", "zhuge", "shangguan", "wong", "lee", "lau",
    "chan", "yeung", "chiu", "chow", "ng", "tsui", "chu", "mah", "woo", "kwok", "lam", "ho",
    "ko", "leung", "law", "sung", "tse", "tong", "tso", "hui", "siu", "fung", "tsang", "ching",
    "choy", "pang", "poon", "yuen", "tung", "yip", "lui", "cheung", "chung", "fong", "kam",
    "yau", "tam", "chau", "hung", "chin",
];

/// Pinyin syllables common in given names.
const GIVEN_SYLLABLES: &[&str] = &[
    "wei", "qiang", "ming", "hua", "jian", "guo", "jun", "feng", "lei", "yong", "tao", "chao",
    "bin", "hui", "gang", "peng", "fei", "kai", "jie", "liang", "long", "zhi", "xin", "hai",
    "dong", "nan", "yang", "chun", "hao", "tian", "wen", "wu", "kang", "hong", "ling", "bo",
    "li", "xia", "yan", "juan", "fang", "mei", "jing", "min", "ping", "lan", "ying", "xue",
    "lin", "xiu", "yue", "ning", "yu", "ting", "qian", "na", "yao", "zhen", "qin", "yun", "lu",
    "jia", "xiao", "da", "an", "de", "rong", "cheng", "zi", "zhong", "xiaoming", "xiaohong",
    "jianguo", "guoqiang", "zhiwei", "haiyan", "xiuying", "guiying", "yuying", "jianhua",
];

// Cantonese and Wade-Giles spellings of surnames with a different pinyin form.
const SURNAME_VARIANTS: &[(&str, &str)] = &[
    ("wong", "wang"),
    ("lee", "li"),
    ("chang", "zhang"),
    ("lau", "liu"),
    ("chan", "chen"),
    ("yeung", "yang"),
    ("chiu", "zhao"),
    ("chow", "zhou"),
    ("ng", "wu"),
    ("tsui", "xu"),
    ("chu", "zhu"),
    ("mah", "ma"),
    ("woo", "hu"),
    ("kwok", "guo"),
    ("lam", "lin"),
    ("ho", "he"),
    ("ko", "gao"),
    ("leung", "liang"),
    ("cheng", "zheng"),
    ("law", "luo"),
    ("sung", "song"),
    ("tse", "xie"),
    ("tong", "tang"),
    ("tso", "cao"),
    ("hui", "xu"),
    ("siu", "xiao"),
    ("fung", "feng"),
    ("tsang", "zeng"),
    ("choy", "cai"),
    ("cheung", "zhang"),
    ("chung", "zhong"),
    ("yuen", "yuan"),
];

const HANZI: &[(char, &str)] = &[
    ('王', "wang"), ('李', "li"), ('张', "zhang"), ('刘', "liu"), ('陈', "chen"), ('杨', "yang"),
    ('黄', "huang"), ('赵', "zhao"), ('周', "zhou"), ('吴', "wu"), ('徐', "xu"), ('孙', "sun"),
    ('朱', "zhu"), ('马', "ma"), ('胡', "hu"), ('郭', "guo"), ('林', "lin"), ('何', "he"),
    ('高', "gao"), ('梁', "liang"), ('郑', "zheng"), ('罗', "luo"), ('宋', "song"), ('谢', "xie"),
    ('唐', "tang"), ('韩', "han"), ('曹', "cao"), ('许', "xu"), ('邓', "deng"), ('萧', "xiao"),
    ('冯', "feng"), ('曾', "zeng"), ('程', "cheng"), ('蔡', "cai"), ('彭', "peng"), ('潘', "pan"),
    ('袁', "yuan"), ('于', "yu"), ('董', "dong"), ('余', "yu"), ('苏', "su"), ('叶', "ye"),
    ('吕', "lv"), ('魏', "wei"), ('蒋', "jiang"), ('田', "tian"), ('杜', "du"), ('丁', "ding"),
    ('沈', "shen"), ('姜', "jiang"), ('范', "fan"), ('江', "jiang"), ('傅', "fu"), ('钟', "zhong"),
    ('卢', "lu"), ('汪', "wang"), ('戴', "dai"), ('崔', "cui"), ('任', "ren"), ('陆', "lu"),
    ('廖', "liao"), ('姚', "yao"), ('方', "fang"), ('金', "jin"), ('邱', "qiu"), ('夏', "xia"),
    ('谭', "tan"), ('贾', "jia"), ('邹', "zou"), ('石', "shi"), ('熊', "xiong"), ('孟', "meng"),
    ('秦', "qin"), ('阎', "yan"), ('薛', "xue"), ('侯', "hou"), ('雷', "lei"), ('白', "bai"),
    ('龙', "long"), ('段', "duan"), ('郝', "hao"), ('孔', "kong"), ('邵', "shao"), ('史', "shi"),
    ('毛', "mao"), ('常', "chang"), ('万', "wan"), ('顾', "gu"), ('赖', "lai"), ('武', "wu"),
    ('康', "kang"), ('贺', "he"), ('严', "yan"), ('尹', "yin"), ('钱', "qian"), ('施', "shi"),
    ('牛', "niu"), ('洪', "hong"), ('龚', "gong"), ('欧', "ou"), ('阳', "yang"), ('司', "si"),
    ('诸', "zhu"), ('葛', "ge"), ('上', "shang"), ('官', "guan"),
    // Traditional forms.
    ('陳', "chen"), ('張', "zhang"), ('劉', "liu"), ('楊', "yang"), ('黃', "huang"), ('趙', "zhao"),
    ('吳', "wu"), ('孫', "sun"), ('馬', "ma"), ('鄭', "zheng"), ('羅', "luo"), ('謝', "xie"),
    ('韓', "han"), ('許', "xu"), ('鄧', "deng"), ('馮', "feng"), ('葉', "ye"), ('蘇', "su"),
    ('呂', "lv"), ('盧', "lu"), ('陸', "lu"), ('鍾', "zhong"), ('錢', "qian"), ('龔', "gong"),
    ('嚴', "yan"), ('賴', "lai"), ('顧', "gu"), ('萬', "wan"), ('歐', "ou"), ('陽', "yang"),
    // Given-name characters.
    ('伟', "wei"), ('偉', "wei"), ('强', "qiang"), ('明', "ming"), ('华', "hua"), ('華', "hua"),
    ('建', "jian"), ('国', "guo"), ('國', "guo"), ('军', "jun"), ('峰', "feng"), ('磊', "lei"),
    ('勇', "yong"), ('涛', "tao"), ('超', "chao"), ('斌', "bin"), ('辉', "hui"), ('刚', "gang"),
    ('鹏', "peng"), ('飞', "fei"), ('凯', "kai"), ('杰', "jie"), ('亮', "liang"), ('志', "zhi"),
    ('鑫', "xin"), ('海', "hai"), ('东', "dong"), ('東', "dong"), ('南', "nan"), ('春', "chun"),
    ('浩', "hao"), ('天', "tian"), ('文', "wen"), ('健', "jian"), ('宏', "hong"), ('俊', "jun"),
    ('豪', "hao"), ('凌', "ling"), ('博', "bo"), ('丽', "li"), ('麗', "li"), ('红', "hong"),
    ('霞', "xia"), ('燕', "yan"), ('娟', "juan"), ('芳', "fang"), ('梅', "mei"), ('玲', "ling"),
    ('静', "jing"), ('敏', "min"), ('艳', "yan"), ('萍', "ping"), ('莉', "li"), ('兰', "lan"),
    ('英', "ying"), ('慧', "hui"), ('雪', "xue"), ('琳', "lin"), ('颖', "ying"), ('洁', "jie"),
    ('秀', "xiu"), ('美', "mei"), ('花', "hua"), ('月', "yue"), ('宁', "ning"), ('雨', "yu"),
    ('婷', "ting"), ('晶', "jing"), ('欣', "xin"), ('倩', "qian"), ('娜', "na"), ('瑶', "yao"),
    ('蕾', "lei"), ('薇', "wei"), ('珍', "zhen"), ('琴', "qin"), ('云', "yun"), ('凤', "feng"),
    ('露', "lu"), ('佳', "jia"), ('小', "xiao"), ('大', "da"), ('平', "ping"), ('安', "an"),
    ('德', "de"), ('荣', "rong"), ('成', "cheng"), ('家', "jia"), ('子', "zi"), ('中', "zhong"),
    ('桂', "gui"), ('玉', "yu"),
];

const HONORIFIC_WORDS: &[(&str, &str)] = &[
    ("先生", "xiansheng"),
    ("女士", "nushi"),
    ("小姐", "xiaojie"),
    ("太太", "taitai"),
    ("夫人", "furen"),
    ("老师", "laoshi"),
    ("教授", "jiaoshou"),
    ("博士", "boshi"),
    ("医生", "yisheng"),
];

const HONORIFICS: &[&str] = &["mr", "mrs", "miss", "ms", "dr", "prof", "professor", "mister"];

const COMPOUND_SURNAMES: &[&str] = &[
    "欧阳", "歐陽", "司马", "司馬", "诸葛", "諸葛", "上官", "东方", "皇甫", "尉迟", "公孙",
    "慕容", "长孙", "宇文", "司徒", "夏侯", "令狐",
];

/// Frequency-ordered romanized surnames.
pub(crate) fn romanized_surnames() -> &'static [&'static str] {
    ROMANIZED_SURNAMES
}

pub(crate) fn given_syllables() -> &'static [&'static str] {
    GIVEN_SYLLABLES
}

/// Vowels carrying a pinyin tone mark that other Latin orthographies do not
/// use (macron, caron, or u with diaeresis and tone).
pub(crate) fn is_pinyin_tone_mark(ch: char) -> bool {
    matches!(
        ch,
        'ā' | 'ē' | 'ī' | 'ō' | 'ū' | 'ǎ' | 'ě' | 'ǐ' | 'ǒ' | 'ǔ' | 'ǖ' | 'ǘ' | 'ǚ' | 'ǜ'
    )
}

#[derive(Debug)]
struct MandarinRules {
    tables: RuleTables,
    ranks: FxHashMap<String, usize>,
}

impl MandarinRules {
    fn new(tables: RuleTables) -> Self {
        let mut ranks = FxHashMap::default();
        for (rank, surname) in ROMANIZED_SURNAMES.iter().enumerate() {
            ranks.entry(surname.to_string()).or_insert(rank);
        }
        Self { tables, ranks }
    }

    fn rank(&self, key: &str) -> Option<usize> {
        let canonical = self.surname_key(key);
        let own = self.ranks.get(key).copied();
        let folded = self.ranks.get(canonical).copied();
        match (own, folded) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Characters of the surname at the start of an unspaced Han name.
    fn surname_len(chars: &[(usize, char)], text: &str) -> usize {
        if chars.len() >= 3 && COMPOUND_SURNAMES.contains(&&text[..chars[2].0]) {
            2
        } else {
            1
        }
    }

    fn is_han(text: &str) -> bool {
        !text.is_empty() && text.chars().all(|c| Script::of(c) == Script::Han)
    }
}

impl LanguageRules for MandarinRules {
    fn language(&self) -> Language {
        Language::Mandarin
    }

    fn tables(&self) -> &RuleTables {
        &self.tables
    }

    fn required_tables(&self) -> &'static [TableKind] {
        &[TableKind::Honorifics, TableKind::Transliteration]
    }

    /// An unspaced Han name of two to four characters is split into surname
    /// and given name; the given name stays one segment. Han text the
    /// writer already spaced ("诸葛 亮") and a bare compound surname are
    /// left as written.
    fn segment(&self, raw: &str) -> Vec<Segment> {
        let segments = canonical::segment(raw);
        let spaced = segments.iter().filter(|seg| Self::is_han(&seg.text)).count() > 1;

        let mut out = Vec::with_capacity(segments.len() + 1);
        for seg in segments {
            let chars: Vec<(usize, char)> = seg.text.char_indices().collect();
            let is_honorific = self
                .tables
                .transliteration
                .lookup_word(&seg.text)
                .is_some_and(|latin| self.tables.honorifics.is_suffix(latin));
            if spaced
                || !Self::is_han(&seg.text)
                || !(2..=4).contains(&chars.len())
                || is_honorific
                || COMPOUND_SURNAMES.contains(&seg.text.as_str())
            {
                out.push(seg);
                continue;
            }

            // "王先生" splits the same way; the title is stripped later.
            let split = chars[Self::surname_len(&chars, &seg.text)].0;
            out.push(Segment {
                text: seg.text[..split].to_string(),
                start: seg.start,
                end: seg.start + split,
            });
            out.push(Segment {
                text: seg.text[split..].to_string(),
                start: seg.start + split,
                end: seg.end,
            });
        }
        out
    }

    fn name_order(&self, surfaces: &[&str], keys: &[&str]) -> NameOrder {
        if surfaces
            .iter()
            .any(|s| canonical::contains_script(s, Script::Han))
        {
            return NameOrder::FamilyFirst;
        }
        let (Some(first), Some(last)) = (keys.first(), keys.last()) else {
            return NameOrder::GivenFirst;
        };
        if keys.len() < 2 {
            return NameOrder::GivenFirst;
        }
        match (self.rank(first), self.rank(last)) {
            (Some(_), None) => NameOrder::FamilyFirst,
            (Some(a), Some(b)) if a <= b => NameOrder::FamilyFirst,
            _ => NameOrder::GivenFirst,
        }
    }

    fn particle_starts_surname(&self) -> bool {
        false
    }
}

pub(super) fn spec() -> LanguageSpec {
    let honorific_suffixes: Vec<&str> = HONORIFIC_WORDS.iter().map(|(_, latin)| *latin).collect();
    let mut honorifics = HonorificSet::new(HONORIFICS.iter().copied(), honorific_suffixes);
    honorifics.extend_prefixes(HONORIFIC_WORDS.iter().map(|(_, latin)| *latin));

    let tables = RuleTables {
        honorifics,
        transliteration: TransliterationTable::from_chars(HANZI)
            .syllabic()
            .with_words(HONORIFIC_WORDS),
        surname_variants: SURNAME_VARIANTS
            .iter()
            .map(|(from, to)| (from.to_string(), to.to_string()))
            .collect(),
        ..Default::default()
    };
    LanguageSpec {
        language: Language::Mandarin,
        tables,
        build,
    }
}

fn build(tables: RuleTables) -> Box<dyn LanguageRules> {
    Box::new(MandarinRules::new(tables))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> Box<dyn LanguageRules> {
        spec().into_rules()
    }

    fn texts(segments: Vec<Segment>) -> Vec<String> {
        segments.into_iter().map(|s| s.text).collect()
    }

    #[test]
    fn han_names_split_into_surname_and_given() {
        let rules = rules();
        assert_eq!(texts(rules.segment("王伟")), vec!["王", "伟"]);
        assert_eq!(texts(rules.segment("王小明")), vec!["王", "小明"]);
        assert_eq!(texts(rules.segment("欧阳修明")), vec!["欧阳", "修明"]);
        assert_eq!(texts(rules.segment("诸葛亮")), vec!["诸葛", "亮"]);
        assert_eq!(texts(rules.segment("Wang Wei")), vec!["Wang", "Wei"]);
    }

    #[test]
    fn spaced_han_and_bare_compound_surnames_stay_whole() {
        let rules = rules();
        assert_eq!(texts(rules.segment("诸葛 亮")), vec!["诸葛", "亮"]);
        assert_eq!(texts(rules.segment("上官 婉儿")), vec!["上官", "婉儿"]);
        assert_eq!(texts(rules.segment("王 小明")), vec!["王", "小明"]);
        assert_eq!(texts(rules.segment("欧阳")), vec!["欧阳"]);
    }

    #[test]
    fn split_offsets_cover_the_input() {
        let rules = rules();
        let input = "李 王伟";
        for seg in rules.segment(input) {
            assert_eq!(&input[seg.start..seg.end], seg.text);
        }
    }

    #[test]
    fn more_common_surname_is_the_family_name() {
        let rules = rules();
        assert_eq!(rules.name_order(&["Wang", "Wei"], &["wang", "wei"]), NameOrder::FamilyFirst);
        assert_eq!(rules.name_order(&["Wei", "Wang"], &["wei", "wang"]), NameOrder::GivenFirst);
        assert_eq!(
            rules.name_order(&["Xiaoming", "Wong"], &["xiaoming", "wong"]),
            NameOrder::GivenFirst
        );
        assert_eq!(rules.name_order(&["王", "伟"], &["wang", "wei"]), NameOrder::FamilyFirst);
    }

    #[test]
    fn cantonese_surnames_fold_to_pinyin() {
        let rules = rules();
        assert_eq!(rules.surname_key("wong"), "wang");
        assert_eq!(rules.surname_key("chan"), "chen");
        assert_eq!(rules.surname_key("zhang"), "zhang");
    }

    #[test]
    fn tone_marks_are_pinyin_specific() {
        assert!(is_pinyin_tone_mark('ě'));
        assert!(is_pinyin_tone_mark('ā'));
        assert!(!is_pinyin_tone_mark('é'));
        assert!(given_syllables().contains(&"wei"));
    }
}
