/// Possible simplification steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// `2+3 = 5`
    /// `2**10 = 1024`
    ConstantFold,

    /// `-(3) = -3`
    NegateConstant,

    /// `0+a = a`
    /// `a+0 = a`
    AddZero,

    /// `a-0 = a`
    SubtractZero,

    /// `0-a = -a`
    SubtractFromZero,

    /// `1*a = a`
    /// `a*1 = a`
    MultiplyOne,

    /// `0*a = 0`
    /// `a*0 = 0`
    MultiplyZero,

    /// `a/1 = a`
    DivideOne,

    /// `0/a = 0`
    DivideZero,

    /// `a/a = 1`
    DivideSelf,

    /// `a**1 = a`
    PowerOne,

    /// `a**0 = 1`
    PowerZero,

    /// `3+a = a+3`
    ConstantToRight,

    /// `a*3 = 3*a`
    ConstantToLeft,

    /// `2*(3*a) = 6*a`
    GatherConstants,

    /// `a+a = 2*a`
    /// `2*a-a = a`
    CombineLikeTerms,

    /// `--a = a`
    DoubleNegation,

    /// `a+(-b) = a-b`
    /// `(-a)+b = b-a`
    /// `a-(-b) = a+b`
    AbsorbNegation,

    /// `a+(-3) = a-3`
    /// `a-(-3) = a+3`
    /// `a+(-3)*b = a-3*b`
    NegativeConstantTerm,

    /// `(-3)-a = (-a)-3`
    LeadingNegativeConstant,

    /// `(-a)*(-b) = a*b`
    /// `(-a)/(-b) = a/b`
    CancelNegations,

    /// `a*(-b) = -(a*b)`
    /// `(-a)/b = -(a/b)`
    HoistNegation,

    /// `-(3*a) = -3*a`
    NegateCoefficient,

    /// `-1*a = -a`
    MultiplyMinusOne,

    /// `-(a+b) = (-a)-b`
    /// `-(a-b) = (-a)+b`
    DistributeNegation,

    /// `a*a = a**2`
    /// `a**2*a**3 = a**(2+3)`
    /// `a**2*a = a**(2+1)`
    CombineLikeFactors,

    /// `a**5/a**2 = a**(5-2)`
    /// `a**5/a = a**(5-1)`
    /// `a/a**5 = a**(1-5)`
    DivideLikeFactors,

    /// `(a**b)**c = a**(b*c)`
    PowerPower,

    /// `(a*b)**c = a**c*b**c`
    DistributePower,

    /// `a*(b+c) = a*b+a*c`
    DistributiveProperty,

    /// `log(e) = 1`
    LogE,

    /// `(a+2)+3 = a+(3+2)`
    /// `a-(a+b) = (a-a)-b`
    Regroup,
}
