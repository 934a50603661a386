/// Abstract column type tag. Each dialect maps it onto its own DDL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    TinyInteger,
    SmallInteger,
    MediumInteger,
    Integer,
    BigInteger,
    Boolean,
    Float,
    Double,
    Decimal,
    Date,
    Time,
    Timestamp,
    DateTime,
    Char,
    Varchar,
    Binary,
    VarBinary,
    TinyBlob,
    Blob,
    MediumBlob,
    LongBlob,
    TinyText,
    Text,
    MediumText,
    LongText,
    Enum,
    Json,
}

impl TypeKind {
    pub fn is_integer(self) -> bool {
        use TypeKind::*;
        matches!(
            self,
            TinyInteger | SmallInteger | MediumInteger | Integer | BigInteger
        )
    }

    pub fn is_numeric(self) -> bool {
        use TypeKind::*;
        self.is_integer() || matches!(self, Float | Double | Decimal)
    }

    /// Types that accept a character set and collation.
    pub fn is_textual(self) -> bool {
        use TypeKind::*;
        matches!(
            self,
            Char | Varchar | TinyText | Text | MediumText | LongText | Enum
        )
    }
}

/// A column type with its parameters and modifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct Type {
    pub kind: TypeKind,

    /// Display width for integers, length for character and binary types.
    pub length: Option<u32>,

    pub precision: Option<u32>,
    pub scale: Option<u32>,
    pub unsigned: bool,
    pub zero_fill: bool,
    pub charset: Option<String>,
    pub collate: Option<String>,

    /// Members of an ENUM
    pub values: Vec<String>,
}

macro_rules! ctor {
    ( $( $fn_name:ident => $kind:ident, )* ) => {
        $(
            pub fn $fn_name() -> Type {
                Type::new(TypeKind::$kind)
            }
        )*
    };
}

impl Type {
    pub fn new(kind: TypeKind) -> Type {
        Type {
            kind,
            length: None,
            precision: None,
            scale: None,
            unsigned: false,
            zero_fill: false,
            charset: None,
            collate: None,
            values: vec![],
        }
    }

    ctor! {
        tiny_integer => TinyInteger,
        small_integer => SmallInteger,
        medium_integer => MediumInteger,
        integer => Integer,
        big_integer => BigInteger,
        boolean => Boolean,
        date => Date,
        time => Time,
        timestamp => Timestamp,
        date_time => DateTime,
        tiny_blob => TinyBlob,
        blob => Blob,
        medium_blob => MediumBlob,
        long_blob => LongBlob,
        tiny_text => TinyText,
        text => Text,
        medium_text => MediumText,
        long_text => LongText,
        json => Json,
    }

    pub fn float() -> Type {
        Type::new(TypeKind::Float)
    }

    pub fn double() -> Type {
        Type::new(TypeKind::Double)
    }

    pub fn decimal(precision: u32, scale: u32) -> Type {
        Type {
            precision: Some(precision),
            scale: Some(scale),
            ..Type::new(TypeKind::Decimal)
        }
    }

    pub fn char(length: u32) -> Type {
        Type::new(TypeKind::Char).length(length)
    }

    pub fn varchar(length: u32) -> Type {
        Type::new(TypeKind::Varchar).length(length)
    }

    pub fn binary(length: u32) -> Type {
        Type::new(TypeKind::Binary).length(length)
    }

    pub fn var_binary(length: u32) -> Type {
        Type::new(TypeKind::VarBinary).length(length)
    }

    pub fn enumeration<S: Into<String>>(values: impl IntoIterator<Item = S>) -> Type {
        Type {
            values: values.into_iter().map(Into::into).collect(),
            ..Type::new(TypeKind::Enum)
        }
    }

    pub fn length(mut self, length: u32) -> Type {
        self.length = Some(length);
        self
    }

    pub fn precision(mut self, precision: u32, scale: u32) -> Type {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    pub fn unsigned(mut self) -> Type {
        self.unsigned = true;
        self
    }

    pub fn zero_fill(mut self) -> Type {
        self.zero_fill = true;
        self
    }

    pub fn charset(mut self, charset: impl Into<String>) -> Type {
        self.charset = Some(charset.into());
        self
    }

    pub fn collate(mut self, collate: impl Into<String>) -> Type {
        self.collate = Some(collate.into());
        self
    }
}

impl From<TypeKind> for Type {
    fn from(kind: TypeKind) -> Self {
        Type::new(kind)
    }
}
