use crate::document::FontWeight;
use pdf_writer::Ref;
use std::collections::HashMap;

#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum RefType {
    Catalog,
    Info,
    PageTree,
    Page(usize),
    ContentForPage(usize),
    Font(FontWeight),
    Image(usize),
    ImageMask(usize),
}

/// Hands out PDF object ids in allocation order, remembering which object
/// each id was generated for
pub struct ObjectReferences {
    refs: HashMap<RefType, Ref>,
    next_id: i32,
}

impl ObjectReferences {
    pub fn new() -> ObjectReferences {
        ObjectReferences {
            refs: HashMap::new(),
            next_id: 1,
        }
    }

    fn new_id(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    pub fn get(&self, ref_type: RefType) -> Option<Ref> {
        self.refs.get(&ref_type).copied()
    }

    pub fn gen(&mut self, ref_type: RefType) -> Ref {
        let id = self.new_id();
        self.refs.insert(ref_type, id);
        id
    }

    /// The id for `ref_type`, generating one on first use
    pub fn get_or_gen(&mut self, ref_type: RefType) -> Ref {
        match self.get(ref_type) {
            Some(id) => id,
            None => self.gen(ref_type),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn ids_are_handed_out_in_order() {
        let mut refs = ObjectReferences::new();
        let catalog = refs.gen(RefType::Catalog);
        let tree = refs.gen(RefType::PageTree);
        assert_eq!(catalog.get(), 1);
        assert_eq!(tree.get(), 2);
        assert_eq!(refs.get(RefType::Catalog), Some(catalog));
        assert_eq!(refs.get(RefType::Page(0)), None);
    }

    #[test]
    fn get_or_gen_reuses_ids() {
        let mut refs = ObjectReferences::new();
        let first = refs.get_or_gen(RefType::Font(FontWeight::Bold));
        let second = refs.get_or_gen(RefType::Font(FontWeight::Bold));
        assert_eq!(first, second);
    }
}
