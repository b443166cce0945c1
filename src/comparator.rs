use std::cmp::Ordering;

pub fn compare_strings<S: AsRef<str>>(a: &S, b: &S) -> Ordering {
    a.as_ref().cmp(b.as_ref())
}

pub fn compare_int(a: &i64, b: &i64) -> Ordering {
    a.cmp(b)
}

pub fn compare_uint(a: &u64, b: &u64) -> Ordering {
    a.cmp(b)
}

// NaN is neither less nor greater than anything, so it reports Equal.
// Searching data that contains NaN gives no meaningful order.
pub fn compare_f64(a: &f64, b: &f64) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub fn compare_f32(a: &f32, b: &f32) -> Ordering {
    a.partial_cmp(b).unwrap_or(Ordering::Equal)
}

pub fn compare_bool(a: &bool, b: &bool) -> Ordering {
    a.cmp(b)
}

pub fn compare_byte(a: &u8, b: &u8) -> Ordering {
    a.cmp(b)
}

pub fn compare_char(a: &char, b: &char) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_strings() {
        assert_eq!(compare_strings(&"apple", &"banana"), Ordering::Less);
        assert_eq!(compare_strings(&"banana", &"banana"), Ordering::Equal);
        assert_eq!(
            compare_strings(&String::from("cherry"), &String::from("Cherry")),
            Ordering::Greater
        );
        assert_eq!(compare_strings(&"", &"a"), Ordering::Less);
    }

    #[test]
    fn test_compare_integers() {
        assert_eq!(compare_int(&-3, &2), Ordering::Less);
        assert_eq!(compare_int(&i64::MAX, &i64::MIN), Ordering::Greater);
        assert_eq!(compare_uint(&7, &7), Ordering::Equal);
        assert_eq!(compare_uint(&0, &u64::MAX), Ordering::Less);
        assert_eq!(compare_byte(&b'a', &b'b'), Ordering::Less);
        assert_eq!(compare_byte(&255, &0), Ordering::Greater);
    }

    #[test]
    fn test_compare_floats() {
        assert_eq!(compare_f64(&1.5, &2.5), Ordering::Less);
        assert_eq!(compare_f64(&-0.0, &0.0), Ordering::Equal);
        assert_eq!(compare_f32(&3.0, &-3.0), Ordering::Greater);
        assert_eq!(compare_f64(&f64::NAN, &1.0), Ordering::Equal);
        assert_eq!(compare_f32(&1.0, &f32::NAN), Ordering::Equal);
    }

    #[test]
    fn test_compare_bool() {
        assert_eq!(compare_bool(&false, &true), Ordering::Less);
        assert_eq!(compare_bool(&true, &false), Ordering::Greater);
        assert_eq!(compare_bool(&true, &true), Ordering::Equal);
        assert_eq!(compare_bool(&false, &false), Ordering::Equal);
    }

    #[test]
    fn test_compare_char() {
        assert_eq!(compare_char(&'a', &'z'), Ordering::Less);
        assert_eq!(compare_char(&'é', &'e'), Ordering::Greater);
        assert_eq!(compare_char(&'中', &'中'), Ordering::Equal);
    }
}
